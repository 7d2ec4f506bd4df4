//! Uniform random strategy.
//!
//! A baseline opponent: picks any legal move with equal probability.
//! Seeded with ChaCha8 so games against it replay deterministically.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::{GameState, Move};

use super::strategy::Strategy;

/// Picks a uniformly random legal move.
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// New strategy with the given seed. The same seed produces the same
    /// sequence of picks.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..moves.len());
        Some(moves[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_a_legal_move() {
        let state = GameState::new(100);
        let mut strategy = RandomStrategy::new(42);

        let mv = strategy.choose_move(&state).unwrap();
        assert!(state.legal_moves().contains(&mv));
    }

    #[test]
    fn test_returns_none_on_terminal_position() {
        let state = GameState::new(10).apply(Move::multiply(7)).unwrap();
        let mut strategy = RandomStrategy::new(42);

        assert_eq!(strategy.choose_move(&state), None);
    }

    #[test]
    fn test_same_seed_same_picks() {
        let state = GameState::new(100);

        let picks_a: Vec<_> = {
            let mut strategy = RandomStrategy::new(7);
            (0..10).map(|_| strategy.choose_move(&state)).collect()
        };
        let picks_b: Vec<_> = {
            let mut strategy = RandomStrategy::new(7);
            (0..10).map(|_| strategy.choose_move(&state)).collect()
        };

        assert_eq!(picks_a, picks_b);
    }
}
