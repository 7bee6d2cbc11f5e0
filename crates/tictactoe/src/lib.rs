//! Tic-tac-toe game logic on an N×N board.
//!
//! This crate is the rules layer only. It performs no I/O: front-ends read
//! input, call into [`GameState`], and render [`Board::render`] themselves.
//!
//! # Architecture
//!
//! - **Board**: square storage plus line-based win detection
//! - **Player**: immutable name and [`Symbol`] pair
//! - **GameState**: one board, two players, turn alternation
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, Player};
//!
//! let mut game = GameState::new([Player::new("Ann", "X"), Player::new("Bo", "O")]);
//! for pos in [1, 2, 4, 5, 7] {
//!     game.make_move(pos);
//! }
//! assert!(game.is_game_over());
//! assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Ann"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game_state;
mod player;
mod symbol;

pub use board::{Board, BoardError, DEFAULT_SIZE, Square, parse_position};
pub use game_state::{GameState, GameStatus};
pub use player::Player;
pub use symbol::Symbol;
