//! One interactive duel.
//!
//! A session threads a single explicit `GameState` value between the
//! human seat and a machine strategy. Nothing is shared or global: each
//! accepted move replaces the held state with its successor, and a failed
//! move leaves it exactly as it was.

use tracing::{debug, info};

use crate::core::{GameState, IllegalMoveError, Move, Player};
use crate::search::Strategy;

/// A duel between a human and a machine strategy.
///
/// The machine always occupies `Player::Two`, the seat the bundled
/// minimax scores for; the human is `Player::One`. Either seat may open
/// the game. Callers drive turn order: check `machine_to_move` and call
/// the matching `play_*` method.
pub struct Session<S> {
    state: GameState,
    machine: S,
}

impl<S: Strategy> Session<S> {
    /// Start a duel with the given ceiling and opening player.
    pub fn new(ceiling: u64, first_mover: Player, machine: S) -> Self {
        info!(ceiling, ?first_mover, "starting duel");
        Self {
            state: GameState::new(ceiling).with_mover(first_mover),
            machine,
        }
    }

    /// The current position.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the duel has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// The winner, once the duel has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Whether the machine seat is to move.
    #[must_use]
    pub fn machine_to_move(&self) -> bool {
        self.state.mover() == Player::Two
    }

    /// Apply the human's move, returning the new running number.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMoveError` when the move is not legal; the
    /// position is unchanged and the caller should re-prompt.
    pub fn play_human(&mut self, mv: Move) -> Result<u64, IllegalMoveError> {
        self.state = self.state.apply(mv)?;
        debug!(%mv, current = self.state.current_number(), "human move");
        Ok(self.state.current_number())
    }

    /// Let the machine take its turn, returning the move it made.
    ///
    /// `None` means the machine had no legal move, which only happens in
    /// a terminal position.
    pub fn play_machine(&mut self) -> Option<Move> {
        let mv = self.machine.choose_move(&self.state)?;
        match self.state.apply(mv) {
            Ok(next) => {
                self.state = next;
                debug!(%mv, current = self.state.current_number(), "machine move");
                Some(mv)
            }
            Err(_) => None,
        }
    }
}
