//! Move markers.

use serde::{Deserialize, Serialize};

/// The marker a player places on the board, e.g. `"X"`.
///
/// Two symbols are the same marker exactly when their text is equal.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Returns the marker text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}
