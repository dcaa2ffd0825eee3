mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, Line, get_available_moves, winning_lines};
pub use bot_controller::{MACHINE_MARK, score_moves, select_move};
pub use game_state::GameState;
pub use settings::{DEFAULT_SIZE, GameSettings, MIN_SIZE};
pub use types::{Mark, Mode, Outcome};
pub use win_detector::{evaluate, winning_line};
