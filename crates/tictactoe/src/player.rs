//! Player identity.

use crate::Symbol;
use derive_getters::Getters;

/// A named participant and the symbol they play.
///
/// Immutable once built. Names are not checked for emptiness and symbols
/// are not checked for uniqueness; that is up to whoever seats the players.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_new::new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Marker placed on the board for this player's moves.
    #[new(into)]
    symbol: Symbol,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
