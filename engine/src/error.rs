use thiserror::Error;

use crate::game::{Mark, Outcome};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board size must be at least 2, got {size}")]
    InvalidSize { size: usize },

    #[error("board size {size} is too large")]
    BoardTooLarge { size: usize },

    #[error("board of size {size} needs {expected} cells, got {got}")]
    InvalidBoardLength {
        size: usize,
        expected: usize,
        got: usize,
    },

    #[error("unknown cell symbol '{symbol}'")]
    InvalidCellSymbol { symbol: char },

    #[error("invalid move at {index}: {reason}")]
    InvalidMove { index: usize, reason: InvalidMoveReason },

    #[error("{mark:?} is not a player mark")]
    InvalidMark { mark: Mark },

    #[error("no move available on a board that is {outcome}")]
    NoMoveAvailable { outcome: Outcome },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    #[error("position out of bounds")]
    OutOfBounds,

    #[error("cell is already marked")]
    Occupied,

    #[error("game is already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
