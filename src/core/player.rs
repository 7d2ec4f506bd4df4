//! Player identification for the two seats of a duel.

use serde::{Deserialize, Serialize};

/// One of the two players in a duel.
///
/// `Player::One` takes the first move of a fresh game unless the caller
/// seats the other player first. By convention `Player::Two` is the seat
/// the bundled minimax strategy scores for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The first seat.
    One,
    /// The second seat, conventionally the machine.
    Two,
}

impl Player {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}
