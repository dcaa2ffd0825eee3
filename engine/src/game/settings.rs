use serde::{Deserialize, Serialize};

use super::board::cell_count;
use super::types::Mode;
use crate::config::Validate;

pub const MIN_SIZE: usize = 2;
pub const DEFAULT_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub size: usize,
    #[serde(default)]
    pub mode: Mode,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            mode: Mode::HumanVsHuman,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.size < MIN_SIZE {
            return Err(format!(
                "Board size must be at least {}, got {}",
                MIN_SIZE, self.size
            ));
        }
        cell_count(self.size).map_err(|e| e.to_string())?;
        Ok(())
    }
}
