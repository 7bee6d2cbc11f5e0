//! Line-based game loop.

use crate::{ConsoleConfig, ConsoleError};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use tictactoe::{Board, GameState, Player, Symbol, parse_position};
use tracing::{debug, info, instrument};

/// Answer to the rematch prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Replay {
    /// Play another game with the same players.
    #[strum(serialize = "y")]
    Yes,
    /// Stop.
    #[strum(serialize = "n")]
    No,
}

impl Replay {
    /// Reads an answer; a blank line means yes. Anything else is `None`.
    pub fn from_answer(answer: &str) -> Option<Self> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Some(Replay::Yes);
        }
        answer.parse().ok()
    }
}

/// Interactive two-player session over a line reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading answers from `input` and printing to `output`.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consumes the console and returns its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Seats both players, then plays games until nobody wants a rematch.
    #[instrument(skip(self), fields(board_size = self.config.board_size()))]
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        let players = [self.create_player(1)?, self.create_player(2)?];
        let board = Board::with_size(*self.config.board_size())?;
        let mut state = GameState::with_board(players, board);

        loop {
            self.play(&mut state)?;
            if self.ask_replay()? == Replay::No {
                info!("Session finished");
                return Ok(());
            }
        }
    }

    /// Plays one game from an empty board to its result.
    #[instrument(skip_all)]
    pub fn play(&mut self, state: &mut GameState) -> Result<(), ConsoleError> {
        state.reset();
        while !state.is_game_over() {
            self.play_turn(state)?;
        }
        info!(status = %state.status(), turns = state.turn(), "Game over");
        self.display_winner(state)
    }

    /// Asks for a player's name and symbol. `number` is the 1-based seat.
    #[instrument(skip(self))]
    pub fn create_player(&mut self, number: usize) -> Result<Player, ConsoleError> {
        self.clear_screen()?;
        writeln!(self.output, "Player {number}, what's your name?")?;
        let name = capitalize(self.read_line("a player name")?.trim());

        let default_symbol = self.config.default_symbol(number).clone();
        writeln!(
            self.output,
            "Choose your token: (press enter for default: {default_symbol})"
        )?;
        let answer = self.read_line("a player token")?;
        let symbol = match answer.trim() {
            "" => default_symbol,
            token => Symbol::from(token),
        };

        debug!(%name, %symbol, "Player created");
        Ok(Player::new(name, symbol))
    }

    /// Prompts the current player until they give a legal position, then plays it.
    #[instrument(skip_all, fields(turn = state.turn()))]
    pub fn play_turn(&mut self, state: &mut GameState) -> Result<(), ConsoleError> {
        self.clear_screen()?;
        let mut pos = self.prompt_move(state, "")?;
        while !pos.is_some_and(|p| state.is_legal_move(p)) {
            debug!(?pos, "Rejected move");
            self.clear_screen()?;
            pos = self.prompt_move(state, "This move is illegal.")?;
        }
        if let Some(pos) = pos {
            state.make_move(pos);
        }
        Ok(())
    }

    fn prompt_move(&mut self, state: &GameState, header: &str) -> Result<Option<i64>, ConsoleError> {
        writeln!(self.output, "{header}")?;
        write!(self.output, "{}", state.board())?;
        writeln!(
            self.output,
            "{}, make a move (1 - {})",
            state.current_player().name(),
            state.board().area()
        )?;
        Ok(parse_position(&self.read_line("a move")?))
    }

    /// Shows the final board and who won.
    pub fn display_winner(&mut self, state: &GameState) -> Result<(), ConsoleError> {
        self.clear_screen()?;
        writeln!(self.output)?;
        write!(self.output, "{}", state.board())?;
        match state.winner() {
            Some(winner) => write!(self.output, "{} won! ", winner.name())?,
            None => write!(self.output, "It's a draw! ")?,
        }
        Ok(())
    }

    /// Asks for a rematch until the answer is `y`, `n` or blank.
    pub fn ask_replay(&mut self) -> Result<Replay, ConsoleError> {
        writeln!(self.output, "Play again? [Y/n]")?;
        loop {
            if let Some(replay) = Replay::from_answer(&self.read_line("a replay answer")?) {
                return Ok(replay);
            }
        }
    }

    fn read_line(&mut self, waiting_for: &'static str) -> Result<String, ConsoleError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed { waiting_for });
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn clear_screen(&mut self) -> Result<(), ConsoleError> {
        if *self.config.clear_screen() {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
