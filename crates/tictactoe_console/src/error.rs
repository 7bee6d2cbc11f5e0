//! Console error types.

use derive_more::{Display, Error, From};
use tictactoe::BoardError;

/// Failure while running a console session.
#[derive(Debug, Display, Error, From)]
pub enum ConsoleError {
    /// Reading from input or writing to output failed.
    #[display("I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// Input ended while a prompt was waiting for an answer.
    #[display("Input closed while waiting for {}", waiting_for)]
    InputClosed {
        /// What the prompt was asking for.
        waiting_for: &'static str,
    },

    /// The configured board could not be built.
    #[display("{}", _0)]
    #[from]
    Board(BoardError),
}
