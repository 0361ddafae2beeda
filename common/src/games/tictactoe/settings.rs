use std::time::Duration;

use crate::config::Validate;
use super::types::Difficulty;

pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(500);
pub const MAX_THINKING_DELAY: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub difficulty: Difficulty,
    pub thinking_delay: Duration,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            thinking_delay: DEFAULT_THINKING_DELAY,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.thinking_delay > MAX_THINKING_DELAY {
            return Err(format!(
                "Thinking delay ({} ms) cannot exceed {} ms",
                self.thinking_delay.as_millis(),
                MAX_THINKING_DELAY.as_millis()
            ));
        }
        Ok(())
    }
}
