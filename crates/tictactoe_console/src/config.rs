//! Console configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe::{DEFAULT_SIZE, Symbol};
use tracing::{debug, info, instrument};

/// Largest accepted `board_size`; square numbers up to 961 still fit the
/// three-character cells of the rendered board.
pub const MAX_BOARD_SIZE: usize = 31;

/// Settings for a console session, usually read from a TOML file.
///
/// ```toml
/// board_size = 4
/// default_symbols = ["X", "O"]
/// clear_screen = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Symbols offered to player 1 and player 2 when they just press enter.
    #[serde(default = "default_symbols")]
    default_symbols: [Symbol; 2],

    /// Whether to clear the terminal before each prompt.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_board_size() -> usize {
    DEFAULT_SIZE
}

fn default_symbols() -> [Symbol; 2] {
    [Symbol::from("X"), Symbol::from("O")]
}

fn default_clear_screen() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            default_symbols: default_symbols(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()
    }

    /// Replaces the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Turns screen clearing on or off.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Returns the default symbol for a 1-based seat number.
    pub fn default_symbol(&self, player_number: usize) -> &Symbol {
        if player_number <= 1 {
            &self.default_symbols[0]
        } else {
            &self.default_symbols[1]
        }
    }

    /// Rejects settings no game can be played with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1".to_string()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at most {MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.default_symbols[0] == self.default_symbols[1] {
            return Err(ConfigError::new(format!(
                "default_symbols must differ, both are {:?}",
                self.default_symbols[0].as_str()
            )));
        }
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
