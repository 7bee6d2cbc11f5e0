//! Turn-by-turn session state for one board and two players.

use crate::{Board, Player};
use tracing::{debug, info, instrument, warn};

/// Outcome of the session so far.
///
/// Never stored: [`GameState::status`] recomputes it from the turn count
/// and the board on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Every turn was used without a winning line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended either way.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} won!", player.name()),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// A game between two players on one board.
///
/// `players[0]` moves on even turns and `players[1]` on odd turns, so the
/// first player always opens.
///
/// Every call to [`GameState::make_move`] uses up a turn, including calls
/// with an illegal position. In that case nothing is placed and play simply
/// passes to the other player. Front-ends that do not want this should check
/// [`GameState::is_legal_move`] before moving, and should stop moving once
/// [`GameState::is_game_over`] is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    turn: usize,
}

impl GameState {
    /// Starts a game on an empty 3×3 board.
    #[instrument(skip(players), fields(first = %players[0], second = %players[1]))]
    pub fn new(players: [Player; 2]) -> Self {
        Self::with_board(players, Board::new())
    }

    /// Starts a game on the given board, cleared first.
    #[instrument(skip(players, board), fields(size = board.size()))]
    pub fn with_board(players: [Player; 2], mut board: Board) -> Self {
        board.reset();
        info!("New game");
        Self {
            board,
            players,
            turn: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns how many moves have been made since the last reset.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn % 2]
    }

    /// Checks if `pos` is a legal move on the current board.
    pub fn is_legal_move(&self, pos: i64) -> bool {
        self.board.is_legal(pos)
    }

    /// Plays the current player's symbol at `pos` and passes the turn.
    ///
    /// The turn passes even when `pos` is illegal and the board is left
    /// untouched.
    #[instrument(skip(self), fields(turn = self.turn, player = %self.current_player()))]
    pub fn make_move(&mut self, pos: i64) {
        let symbol = self.current_player().symbol().clone();
        if self.board.is_legal(pos) {
            debug!("Placing symbol");
        } else {
            warn!("Illegal move, turn passes without a placement");
        }
        self.board.place_symbol(pos, symbol);
        self.turn += 1;
    }

    /// Checks if the board has run out of turns or either player has a line.
    pub fn is_game_over(&self) -> bool {
        self.turn == self.board.area() || self.winner().is_some()
    }

    /// Returns the first player, in turn order, holding a winning line.
    ///
    /// `None` means either a draw or an unfinished game; use
    /// [`GameState::is_game_over`] to tell them apart. If both players share
    /// a symbol the first player is reported.
    pub fn winner(&self) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| self.board.has_win(player.symbol()))
    }

    /// Derives the current [`GameStatus`].
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player.clone()),
            None if self.is_game_over() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Clears the board and restarts the turn count with the same players.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = 0;
        info!("Game reset");
    }
}
