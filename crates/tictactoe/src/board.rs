//! Square grid storage and line-based win detection.
//!
//! Positions handed to the board are 1-based, counted left to right and top
//! to bottom, so the top-left square is `1` and the bottom-right is `size²`.
//! Any integer is accepted; positions outside the board are simply illegal.

use crate::Symbol;
use derive_more::{Display, Error};
use tracing::{instrument, trace};

/// Side length of a board built with [`Board::new`].
pub const DEFAULT_SIZE: usize = 3;

/// A square on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a player's symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol on this square, if any.
    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Checks if the square holds exactly `symbol`. Empty squares hold nothing.
    pub fn holds(&self, symbol: &Symbol) -> bool {
        matches!(self, Square::Occupied(s) if s == symbol)
    }
}

/// Error building a board.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", message, file, line)]
pub struct BoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// N×N tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Side length, fixed at construction.
    size: usize,
    /// Squares in row-major order; always `size * size` long.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty 3×3 board.
    pub fn new() -> Self {
        Self::empty(DEFAULT_SIZE)
    }

    /// Creates an empty board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when `size` is zero, or when `size²` squares
    /// cannot be counted or allocated.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::new("Board size must be at least 1"));
        }
        let area = size
            .checked_mul(size)
            .ok_or_else(|| BoardError::new(format!("Board size {size} is too large")))?;

        let mut squares = Vec::new();
        squares.try_reserve_exact(area).map_err(|e| {
            BoardError::new(format!("Cannot allocate a {size}x{size} board: {e}"))
        })?;
        squares.resize(area, Square::Empty);
        Ok(Self { size, squares })
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of squares (`size²`).
    pub fn area(&self) -> usize {
        self.squares.len()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Gets the square at a 1-based position.
    pub fn get(&self, pos: i64) -> Option<&Square> {
        self.index(pos).map(|idx| &self.squares[idx])
    }

    /// Converts a 1-based position into a square index, if it is on the board.
    fn index(&self, pos: i64) -> Option<usize> {
        usize::try_from(pos)
            .ok()
            .filter(|p| (1..=self.area()).contains(p))
            .map(|p| p - 1)
    }

    /// Checks if `pos` is on the board and its square is empty.
    pub fn is_legal(&self, pos: i64) -> bool {
        self.index(pos)
            .is_some_and(|idx| self.squares[idx].is_empty())
    }

    /// Places `symbol` at `pos` if the move is legal; otherwise does nothing.
    ///
    /// Callers that need to know whether anything changed should ask
    /// [`Board::is_legal`] first.
    pub fn place_symbol(&mut self, pos: i64, symbol: impl Into<Symbol>) {
        match self.index(pos) {
            Some(idx) if self.squares[idx].is_empty() => {
                self.squares[idx] = Square::Occupied(symbol.into());
            }
            _ => trace!(pos, "Ignoring placement on illegal position"),
        }
    }

    /// Checks if any row, column or diagonal is filled entirely with `symbol`.
    pub fn has_win(&self, symbol: &Symbol) -> bool {
        self.lines()
            .iter()
            .any(|line| line.iter().all(|&idx| self.squares[idx].holds(symbol)))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Empties every square. The size is unchanged.
    pub fn reset(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Every line that can win, as lists of 0-based square indices:
    /// rows, then columns, then the two diagonals.
    pub fn lines(&self) -> Vec<Vec<usize>> {
        let mut lines: Vec<Vec<usize>> = (0..self.size).map(|r| self.row_indices(r)).collect();
        lines.extend((0..self.size).map(|c| self.column_indices(c)));
        lines.push(self.first_diagonal_indices());
        lines.push(self.second_diagonal_indices());
        lines
    }

    /// Squares of a 0-based row, left to right. Empty if out of range.
    pub fn row(&self, row_idx: usize) -> Vec<&Square> {
        self.values_at(self.row_indices(row_idx))
    }

    /// Squares of a 0-based column, top to bottom. Empty if out of range.
    pub fn column(&self, column_idx: usize) -> Vec<&Square> {
        self.values_at(self.column_indices(column_idx))
    }

    /// Squares of the diagonal from top-left to bottom-right.
    pub fn first_diagonal(&self) -> Vec<&Square> {
        self.values_at(self.first_diagonal_indices())
    }

    /// Squares of the diagonal from top-right to bottom-left.
    pub fn second_diagonal(&self) -> Vec<&Square> {
        self.values_at(self.second_diagonal_indices())
    }

    fn values_at(&self, indices: Vec<usize>) -> Vec<&Square> {
        indices.into_iter().map(|idx| &self.squares[idx]).collect()
    }

    fn row_indices(&self, row_idx: usize) -> Vec<usize> {
        if row_idx >= self.size {
            return Vec::new();
        }
        (self.size * row_idx..self.size * (row_idx + 1)).collect()
    }

    fn column_indices(&self, column_idx: usize) -> Vec<usize> {
        if column_idx >= self.size {
            return Vec::new();
        }
        (column_idx..self.area()).step_by(self.size).collect()
    }

    fn first_diagonal_indices(&self) -> Vec<usize> {
        (0..self.area()).step_by(self.size + 1).collect()
    }

    // row + column == size - 1
    fn second_diagonal_indices(&self) -> Vec<usize> {
        (0..self.size)
            .map(|r| r * self.size + (self.size - 1 - r))
            .collect()
    }

    /// Formats the board as text.
    ///
    /// Empty squares show their 1-based position so players can see which
    /// number to type; occupied squares show their symbol.
    ///
    /// ```text
    ///
    ///      1 | 2 | 3
    ///     ---+---+---
    ///      4 | X | 6
    ///     ---+---+---
    ///      7 | 8 | O
    ///
    /// ```
    pub fn render(&self) -> String {
        let padding = " ".repeat(4);
        let separator = format!("{padding}{}\n", vec!["---"; self.size].join("+"));
        let rows = (0..self.size)
            .map(|row_idx| format!("{padding}{}\n", self.format_row(row_idx)))
            .collect::<Vec<_>>()
            .join(&separator);
        format!("\n{rows}\n")
    }

    fn format_row(&self, row_idx: usize) -> String {
        self.row_indices(row_idx)
            .into_iter()
            .map(|idx| match &self.squares[idx] {
                Square::Empty => format!("{:^3}", idx + 1),
                Square::Occupied(symbol) => format!("{:^3}", symbol.as_str()),
            })
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Parses a typed move such as `" 5\n"` into a position.
///
/// Returns `None` for blank or non-numeric input; callers treat that the
/// same as an illegal position.
pub fn parse_position(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Board {
        let mut board = Board::new();
        for pos in 1..=9 {
            board.place_symbol(pos, pos.to_string().as_str());
        }
        board
    }

    fn texts(squares: Vec<&Square>) -> Vec<&str> {
        squares
            .into_iter()
            .filter_map(|s| s.symbol().map(Symbol::as_str))
            .collect()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.size(), 3);
        assert_eq!(board.squares().len(), 9);
        assert!(board.squares().iter().all(Square::is_empty));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(Board::with_size(0).is_err());
        assert_eq!(Board::with_size(5).map(|b| b.area()).ok(), Some(25));
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(Board::with_size(1 << 32).is_err());
        assert!(Board::with_size(usize::MAX).is_err());
    }

    #[test]
    fn test_place_symbol_valid() {
        let mut board = Board::new();
        board.place_symbol(5, "x");
        assert_eq!(board.squares()[4], Square::Occupied(Symbol::from("x")));
        assert!(!board.is_legal(5));
    }

    #[test]
    fn test_place_symbol_ignores_illegal_positions() {
        let mut board = Board::new();
        for pos in [-1, 0, 10, i64::MIN, i64::MAX] {
            assert!(!board.is_legal(pos));
            board.place_symbol(pos, "x");
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_symbol_ignores_occupied_square() {
        let mut board = Board::new();
        board.place_symbol(5, "x");
        board.place_symbol(5, "y");
        assert_eq!(board.get(5), Some(&Square::Occupied(Symbol::from("x"))));
    }

    #[test]
    fn test_rows() {
        let board = numbered();
        assert_eq!(texts(board.row(0)), ["1", "2", "3"]);
        assert_eq!(texts(board.row(1)), ["4", "5", "6"]);
        assert_eq!(texts(board.row(2)), ["7", "8", "9"]);
        assert!(board.row(3).is_empty());
    }

    #[test]
    fn test_columns() {
        let board = numbered();
        assert_eq!(texts(board.column(0)), ["1", "4", "7"]);
        assert_eq!(texts(board.column(1)), ["2", "5", "8"]);
        assert_eq!(texts(board.column(2)), ["3", "6", "9"]);
    }

    #[test]
    fn test_diagonals() {
        let board = numbered();
        assert_eq!(texts(board.first_diagonal()), ["1", "5", "9"]);
        assert_eq!(texts(board.second_diagonal()), ["3", "5", "7"]);
    }

    #[test]
    fn test_classic_board_has_eight_lines() {
        assert_eq!(Board::new().lines().len(), 8);
    }

    #[test]
    fn test_reset_empties_every_square() {
        let mut board = numbered();
        board.reset();
        assert!(board.squares().iter().all(Square::is_empty));
        assert_eq!(board.squares().len(), 9);
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(" 7\n"), Some(7));
        assert_eq!(parse_position("-2"), Some(-2));
        assert_eq!(parse_position(""), None);
        assert_eq!(parse_position("five"), None);
        assert_eq!(parse_position("2.5"), None);
    }
}
