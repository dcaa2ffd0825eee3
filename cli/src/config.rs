use std::path::Path;

use serde::{Deserialize, Serialize};
use tictactoe_engine::{ConfigError, GameSettings, Mode};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Config {
    /// Applies command-line values on top of the file and validates the result.
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        mode: Option<Mode>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = size {
            self.game.size = size;
        }
        if let Some(mode) = mode {
            self.game.mode = mode;
        }
        self.validate().map_err(ConfigError::Validation)?;
        Ok(self)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.simulation.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SimulationConfig {
    pub games: u32,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
        }
    }
}

impl Validate for SimulationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("simulation.games must be greater than 0".to_string());
        }
        Ok(())
    }
}
