use super::board::{Board, Line, winning_lines};
use super::types::{Mark, Outcome};

pub fn evaluate(board: &Board) -> Outcome {
    evaluate_cells(board.cells(), &winning_lines(board.size()))
}

/// Returns the line that decided the game, scanning in the same order as
/// [`evaluate`].
pub fn winning_line(board: &Board) -> Option<Line> {
    let cells = board.cells();
    winning_lines(board.size())
        .into_iter()
        .find(|line| line_owner(cells, line).is_some())
}

/// The first complete line in `lines` names the winner.
pub(crate) fn evaluate_cells(cells: &[Mark], lines: &[Line]) -> Outcome {
    if let Some(mark) = lines.iter().find_map(|line| line_owner(cells, line)) {
        return Outcome::Win(mark);
    }

    if cells.iter().all(|cell| !cell.is_empty()) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

fn line_owner(cells: &[Mark], line: &[usize]) -> Option<Mark> {
    let (&first, rest) = line.split_first()?;
    let mark = cells[first];
    if mark.is_empty() {
        return None;
    }
    rest.iter().all(|&index| cells[index] == mark).then_some(mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: usize, symbols: &str) -> Board {
        Board::from_symbols(size, symbols).unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new(3).unwrap()), Outcome::InProgress);
    }

    #[test]
    fn test_top_row_wins() {
        assert_eq!(evaluate(&board(3, "XXX O.O ...")), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_column_wins() {
        assert_eq!(evaluate(&board(3, "XO. XO. .OX")), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_main_diagonal_wins() {
        assert_eq!(evaluate(&board(3, "XO. OX. ..X")), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_anti_diagonal_wins() {
        assert_eq!(evaluate(&board(3, "XXO XO. O..")), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board(3, "XOX XOO OXX")), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        assert_eq!(evaluate(&board(3, "XXX OOX XOO")), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_earliest_row_decides_simultaneous_wins() {
        assert_eq!(evaluate(&board(3, "XXX ... OOO")), Outcome::Win(Mark::X));
        assert_eq!(evaluate(&board(3, "OOO ... XXX")), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_partial_line_on_larger_board_is_not_a_win() {
        let board = board(4, "XXX. OO.. .... ....");

        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_full_row_on_larger_board_wins() {
        let board = board(4, "OO.. XXXX O... ....");

        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_anti_diagonal_on_five_by_five() {
        let board = board(5, "....O ...O. ..O.. .O... O....");

        assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_two_by_two_diagonal() {
        assert_eq!(evaluate(&board(2, "X. .X")), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = board(3, "XO. .X. O..");

        assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn test_winning_line_reports_first_complete_line() {
        let board = board(3, "XO. XO. X.O");

        assert_eq!(winning_line(&board), Some(vec![0, 3, 6]));
    }

    #[test]
    fn test_column_reported_before_main_diagonal() {
        let board = board(3, "X.. XX. X.X");

        assert_eq!(winning_line(&board), Some(vec![0, 3, 6]));
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_column_reported_before_anti_diagonal() {
        let board = board(3, "..O .OO O.O");

        assert_eq!(winning_line(&board), Some(vec![2, 5, 8]));
    }

    #[test]
    fn test_main_diagonal_reported_before_anti_diagonal() {
        let board = board(3, "X.X .X. X.X");

        assert_eq!(winning_line(&board), Some(vec![0, 4, 8]));
    }

    #[test]
    fn test_winning_line_absent_without_win() {
        assert_eq!(winning_line(&board(3, "XOX XOO OXX")), None);
    }
}
