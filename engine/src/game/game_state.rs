use super::board::Board;
use super::bot_controller::{MACHINE_MARK, select_move};
use super::settings::GameSettings;
use super::types::{Mark, Mode, Outcome};
use super::win_detector::evaluate;
use crate::debug_log;
use crate::error::{GameError, InvalidMoveReason};

/// One game in progress. Transitions return a new state and leave `self`
/// untouched, so a rejected move never changes what the caller holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    mode: Mode,
    last_move: Option<usize>,
}

impl GameState {
    pub fn create(size: usize) -> Result<Self, GameError> {
        Self::with_mode(size, Mode::HumanVsHuman)
    }

    pub fn with_settings(settings: &GameSettings) -> Result<Self, GameError> {
        Self::with_mode(settings.size, settings.mode)
    }

    fn with_mode(size: usize, mode: Mode) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size)?,
            current_mark: Mark::X,
            mode,
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn is_machine_turn(&self) -> bool {
        self.mode == Mode::HumanVsMachine && self.current_mark == MACHINE_MARK
    }

    /// Places the current player's mark at `index`. Against the machine, its
    /// reply is applied before returning.
    pub fn apply_move(&self, index: usize) -> Result<Self, GameError> {
        if self.is_machine_turn() {
            return Err(self.reject(index, InvalidMoveReason::NotYourTurn));
        }

        let mut next = self.clone();
        next.place_mark(index)?;

        if next.is_machine_turn() && next.outcome() == Outcome::InProgress {
            next.play_machine_turn()?;
        }

        Ok(next)
    }

    /// Empty board of the same size and mode, `X` to move.
    pub fn reset(&self) -> Self {
        Self {
            board: self.board.cleared(),
            current_mark: Mark::X,
            mode: self.mode,
            last_move: None,
        }
    }

    /// Switching modes always restarts the game.
    pub fn set_mode(&self, mode: Mode) -> Self {
        Self {
            mode,
            ..self.reset()
        }
    }

    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::Win(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.current_mark),
        }
    }

    fn place_mark(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.board.len() {
            return Err(self.reject(index, InvalidMoveReason::OutOfBounds));
        }
        if self.outcome().is_terminal() {
            return Err(self.reject(index, InvalidMoveReason::GameOver));
        }
        if !self.board.is_valid_move(index) {
            return Err(self.reject(index, InvalidMoveReason::Occupied));
        }

        self.board.set(index, self.current_mark);
        self.last_move = Some(index);
        self.switch_turn();

        Ok(())
    }

    fn play_machine_turn(&mut self) -> Result<(), GameError> {
        let index = select_move(&self.board, self.current_mark)?;
        debug_log!("Machine {} takes cell {}", self.current_mark, index);
        self.place_mark(index)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn reject(&self, index: usize, reason: InvalidMoveReason) -> GameError {
        debug_log!("Rejected move at {} by {}: {}", index, self.current_mark, reason);
        GameError::InvalidMove { index, reason }
    }
}
