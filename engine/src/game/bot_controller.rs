use super::board::{Board, Line, winning_lines};
use super::types::{Mark, Outcome};
use super::win_detector::evaluate_cells;
use crate::error::GameError;

/// The machine always plays second.
pub const MACHINE_MARK: Mark = Mark::O;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

/// Picks the cell `machine_mark` should occupy using full-depth minimax.
///
/// Among equally scored moves the lowest index wins. Fails with
/// [`GameError::NoMoveAvailable`] when the board is full or already decided.
pub fn select_move(board: &Board, machine_mark: Mark) -> Result<usize, GameError> {
    let mut best: Option<(usize, i32)> = None;

    for (index, score) in score_moves(board, machine_mark)? {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index).ok_or(GameError::NoMoveAvailable {
        outcome: Outcome::InProgress,
    })
}

/// Minimax value of every legal move for `machine_mark`, in ascending index
/// order: `1` forced win, `0` draw, `-1` forced loss.
pub fn score_moves(board: &Board, machine_mark: Mark) -> Result<Vec<(usize, i32)>, GameError> {
    let opponent_mark = machine_mark
        .opponent()
        .ok_or(GameError::InvalidMark { mark: machine_mark })?;

    let lines = winning_lines(board.size());
    let outcome = evaluate_cells(board.cells(), &lines);
    if outcome.is_terminal() {
        return Err(GameError::NoMoveAvailable { outcome });
    }

    let mut search = Search {
        board: board.clone(),
        lines,
        machine_mark,
        opponent_mark,
    };

    let mut scores = Vec::new();
    for index in 0..search.board.len() {
        if !search.board.is_valid_move(index) {
            continue;
        }
        let score = search.try_move(index, machine_mark, false);
        scores.push((index, score));
    }

    Ok(scores)
}

/// Working copy of the position. Every hypothetical mark is removed before the
/// next sibling is tried, so the copy always matches the caller's board
/// between root moves.
struct Search {
    board: Board,
    lines: Vec<Line>,
    machine_mark: Mark,
    opponent_mark: Mark,
}

impl Search {
    fn try_move(&mut self, index: usize, mark: Mark, is_maximizing: bool) -> i32 {
        self.board.set(index, mark);
        let score = self.minimax(is_maximizing);
        self.board.set(index, Mark::Empty);
        score
    }

    fn minimax(&mut self, is_maximizing: bool) -> i32 {
        match evaluate_cells(self.board.cells(), &self.lines) {
            Outcome::Win(winner) if winner == self.machine_mark => return WIN_SCORE,
            Outcome::Win(_) => return LOSS_SCORE,
            Outcome::Draw => return DRAW_SCORE,
            Outcome::InProgress => {}
        }

        let mark = if is_maximizing {
            self.machine_mark
        } else {
            self.opponent_mark
        };

        let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
        for index in 0..self.board.len() {
            if !self.board.is_valid_move(index) {
                continue;
            }
            let score = self.try_move(index, mark, !is_maximizing);
            best = if is_maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::win_detector::evaluate;

    fn board(size: usize, symbols: &str) -> Board {
        Board::from_symbols(size, symbols).unwrap()
    }

    #[test]
    fn test_takes_immediate_win_over_lower_drawing_moves() {
        let board = board(3, ".XO .OX ..X");

        assert_eq!(select_move(&board, Mark::O), Ok(6));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        let board = board(3, "XX. .O. ...");

        assert_eq!(select_move(&board, Mark::O), Ok(2));
    }

    #[test]
    fn test_answers_center_with_first_corner() {
        let board = board(3, "... .X. ...");

        assert_eq!(select_move(&board, Mark::O), Ok(0));
    }

    #[test]
    fn test_answers_corner_with_center() {
        let board = board(3, "X.. ... ...");

        assert_eq!(select_move(&board, Mark::O), Ok(4));
    }

    #[test]
    fn test_center_opening_scores() {
        let scores = score_moves(&board(3, "... .X. ..."), Mark::O).unwrap();

        assert_eq!(
            scores,
            vec![(0, 0), (1, -1), (2, 0), (3, -1), (5, -1), (6, 0), (7, -1), (8, 0)]
        );
    }

    #[test]
    fn test_lost_position_picks_first_cell() {
        let board = board(3, "XX. O.. ...");

        let scores = score_moves(&board, Mark::O).unwrap();

        assert!(scores.iter().all(|&(_, score)| score == LOSS_SCORE));
        assert_eq!(select_move(&board, Mark::O), Ok(2));
    }

    #[test]
    fn test_four_by_four_endgame() {
        let board = board(4, "OXXO XOXO XXO. ....");

        assert_eq!(select_move(&board, Mark::O), Ok(15));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board(3, "XOX XOO OXX");

        assert_eq!(
            select_move(&board, Mark::O),
            Err(GameError::NoMoveAvailable {
                outcome: Outcome::Draw
            })
        );
    }

    #[test]
    fn test_decided_board_has_no_move() {
        let board = board(3, "XXX OO. ...");

        assert_eq!(
            select_move(&board, Mark::O),
            Err(GameError::NoMoveAvailable {
                outcome: Outcome::Win(Mark::X)
            })
        );
    }

    #[test]
    fn test_empty_mark_cannot_search() {
        let board = Board::new(3).unwrap();

        assert_eq!(
            select_move(&board, Mark::Empty),
            Err(GameError::InvalidMark { mark: Mark::Empty })
        );
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = board(3, "X.. .O. ..X");
        let before = board.clone();

        select_move(&board, Mark::O).unwrap();

        assert_eq!(board, before);
    }

    fn assert_never_loses(board: &mut Board, machine_mark: Mark, to_move: Mark) {
        match evaluate(board) {
            Outcome::Win(winner) => {
                assert_eq!(winner, machine_mark, "machine lost on\n{}", board);
                return;
            }
            Outcome::Draw => return,
            Outcome::InProgress => {}
        }

        if to_move == machine_mark {
            let index = select_move(board, machine_mark).unwrap();
            board.set(index, machine_mark);
            assert_never_loses(board, machine_mark, machine_mark.opponent().unwrap());
            board.set(index, Mark::Empty);
        } else {
            for index in 0..board.len() {
                if !board.is_valid_move(index) {
                    continue;
                }
                board.set(index, to_move);
                assert_never_loses(board, machine_mark, machine_mark);
                board.set(index, Mark::Empty);
            }
        }
    }

    #[test]
    fn test_never_loses_as_second_player() {
        let mut board = Board::new(3).unwrap();

        assert_never_loses(&mut board, Mark::O, Mark::X);
    }

    #[test]
    fn test_never_loses_as_first_player() {
        let mut board = Board::new(3).unwrap();

        assert_never_loses(&mut board, Mark::X, Mark::X);
    }
}
