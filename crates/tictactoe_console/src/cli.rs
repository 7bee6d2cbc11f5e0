//! Command-line interface.

use crate::{ConfigError, ConsoleConfig};
use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Keep the screen between turns instead of clearing it
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    /// Builds the session configuration: file values first, then flags.
    pub fn resolve_config(&self) -> Result<ConsoleConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ConsoleConfig::from_file(path)?,
            None => ConsoleConfig::default(),
        };
        if let Some(size) = self.size {
            config = config.with_board_size(size);
        }
        if self.no_clear {
            config = config.with_clear_screen(false);
        }
        config.validate()
    }
}
