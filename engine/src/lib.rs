pub mod config;
pub mod error;
pub mod game;
pub mod logger;

pub use error::{ConfigError, GameError, InvalidMoveReason};
pub use game::{
    Board, GameSettings, GameState, Line, MACHINE_MARK, Mark, Mode, Outcome, evaluate,
    get_available_moves, score_moves, select_move, winning_line, winning_lines,
};
