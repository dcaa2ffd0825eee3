use std::fmt;

use super::settings::MIN_SIZE;
use super::types::Mark;
use crate::error::GameError;

/// Linear cell indices (`row * size + col`) that win when uniformly marked.
pub type Line = Vec<usize>;

/// Square grid of marks stored row-major. The size is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, GameError> {
        let len = cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![Mark::Empty; len],
        })
    }

    pub fn from_cells(size: usize, cells: Vec<Mark>) -> Result<Self, GameError> {
        let expected = cell_count(size)?;
        if cells.len() != expected {
            return Err(GameError::InvalidBoardLength {
                size,
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Parses `X`, `O` and `.` symbols row by row; whitespace is skipped.
    pub fn from_symbols(size: usize, symbols: &str) -> Result<Self, GameError> {
        let cells = symbols
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|symbol| Mark::from_symbol(symbol).ok_or(GameError::InvalidCellSymbol { symbol }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(size, cells)
    }

    /// Same size, every cell empty.
    pub fn cleared(&self) -> Self {
        Self {
            size: self.size,
            cells: vec![Mark::Empty; self.cells.len()],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Mark::is_empty)
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let symbols: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
            writeln!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

/// Number of cells on a `size` x `size` board, rejecting sizes below the
/// minimum and squares that do not fit an allocation.
pub fn cell_count(size: usize) -> Result<usize, GameError> {
    if size < MIN_SIZE {
        return Err(GameError::InvalidSize { size });
    }
    size.checked_mul(size)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(GameError::BoardTooLarge { size })
}

/// Rows top to bottom, columns left to right, then the main diagonal and the
/// anti-diagonal. Win detection relies on this order.
pub fn winning_lines(size: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        lines.push((0..size).map(|col| row * size + col).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| row * size + col).collect());
    }
    lines.push((0..size).map(|i| i * size + i).collect());
    lines.push((0..size).map(|i| i * size + (size - i - 1)).collect());

    lines
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}
