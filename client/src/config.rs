pub(crate) use common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use common::games::tictactoe::{Difficulty, MAX_THINKING_DELAY, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        Ok(())
    }
}

impl Config {
    pub fn to_session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            difficulty: self.game.difficulty,
            thinking_delay: Duration::from_millis(self.game.thinking_delay_ms),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub thinking_delay_ms: u64,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if u128::from(self.thinking_delay_ms) > MAX_THINKING_DELAY.as_millis() {
            return Err(format!(
                "thinking_delay_ms must not exceed {}",
                MAX_THINKING_DELAY.as_millis()
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let settings = TicTacToeSessionSettings::default();
        Self {
            game: GameConfig {
                difficulty: settings.difficulty,
                thinking_delay_ms: settings.thinking_delay.as_millis() as u64,
            },
            seed: None,
        }
    }
}
