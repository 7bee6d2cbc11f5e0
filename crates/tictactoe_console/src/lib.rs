//! Console front-end for the `tictactoe` engine.
//!
//! Seats two players, reads moves from a line-based input, renders the board
//! between turns, and offers a rematch after every game.
//!
//! The [`Console`] is generic over its input and output so sessions can be
//! scripted in tests:
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_console::{Console, ConsoleConfig};
//!
//! let script = "Ann\n\nBo\n\n1\n2\n4\n5\n7\nn\n";
//! let config = ConsoleConfig::default().with_clear_screen(false);
//! let mut console = Console::new(Cursor::new(script), Vec::new(), config);
//! console.run().unwrap();
//! let transcript = String::from_utf8(console.into_output()).unwrap();
//! assert!(transcript.contains("Ann won!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod error;

pub use cli::Cli;
pub use config::{ConfigError, ConsoleConfig, MAX_BOARD_SIZE};
pub use console::{Console, Replay};
pub use error::ConsoleError;
