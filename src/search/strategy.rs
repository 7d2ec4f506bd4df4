//! The seam between a game session and whatever picks its machine moves.

use crate::core::{GameState, Move};

/// A move-selection strategy.
///
/// Takes `&mut self` because implementations keep internal scratch: a
/// transposition table, an RNG. Choosing a move never touches the state.
pub trait Strategy {
    /// Pick a move for the position, or `None` when it is terminal.
    fn choose_move(&mut self, state: &GameState) -> Option<Move>;
}
