//! Duel state: the running number, its history, and the rules.
//!
//! ## Value semantics
//!
//! `GameState` is immutable by contract: `apply` returns a new state and
//! leaves the parent untouched. The used-number set and the chain history
//! are `im` persistent structures, so the clone inside `apply` is O(1)
//! structural sharing rather than a deep copy. A search can fan out over
//! siblings of the same parent without cross-contamination.
//!
//! ## Derived terminality
//!
//! There is no stored game-over flag. A position is terminal exactly when
//! `legal_moves` is empty, and the winner is derived from the mover at
//! that point: the player who cannot move loses.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::moves::{Move, MoveList, MAX_OPERAND, MIN_OPERAND};
use super::player::Player;

/// Error returned when a move is not legal in the position it was applied to.
///
/// Covers every way a move can be bad: operand outside
/// `MIN_OPERAND..=MAX_OPERAND`, division with a remainder, multiplication
/// above the ceiling, and results that already appeared in the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IllegalMoveError {
    /// The rejected move.
    pub mv: Move,
    /// The running number the move was applied to.
    pub current: u64,
}

impl std::fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "move {} is not legal from {}", self.mv, self.current)
    }
}

impl std::error::Error for IllegalMoveError {}

/// One position of the duel.
///
/// Fields are private; the accessors below expose everything a front end
/// or a search needs, and `apply` is the only way to advance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The number the next move acts upon.
    current: u64,
    /// Upper bound for multiplication results.
    ceiling: u64,
    /// Every number that has appeared in the chain, starting number included.
    used: ImHashSet<u64>,
    /// The full chain in order. Display only; the rules never read it.
    history: Vector<u64>,
    /// Whose move it is.
    mover: Player,
}

impl GameState {
    /// Start a fresh duel with the given ceiling.
    ///
    /// The running number starts at 1, which counts as already used, and
    /// `Player::One` is to move.
    #[must_use]
    pub fn new(ceiling: u64) -> Self {
        Self {
            current: 1,
            ceiling,
            used: ImHashSet::unit(1),
            history: Vector::unit(1),
            mover: Player::One,
        }
    }

    /// The same position with a different player to move.
    ///
    /// Front ends use this to let the machine seat open the game.
    #[must_use]
    pub fn with_mover(mut self, mover: Player) -> Self {
        self.mover = mover;
        self
    }

    /// The number the next move acts upon.
    #[must_use]
    pub fn current_number(&self) -> u64 {
        self.current
    }

    /// Upper bound for multiplication results.
    #[must_use]
    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Whose move it is in this position.
    #[must_use]
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// The full chain of numbers produced so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<u64> {
        &self.history
    }

    /// Every number that has appeared in the chain.
    #[must_use]
    pub fn used_numbers(&self) -> &ImHashSet<u64> {
        &self.used
    }

    /// Enumerate the legal moves of this position.
    ///
    /// The order is fixed: multiplications for operands 2..=10 first, then
    /// divisions for operands 2..=10. Search tie-breaking keys off this
    /// order, so it must not change.
    ///
    /// A multiplication is legal when its product stays within the ceiling
    /// and has not appeared before. A division is legal when it is exact
    /// and its quotient has not appeared before; divisions never exceed
    /// the running number, so they carry no ceiling check.
    ///
    /// An empty list means the position is terminal.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();

        for operand in MIN_OPERAND..=MAX_OPERAND {
            let mv = Move::multiply(operand);
            if let Some(result) = mv.result(self.current) {
                if result <= self.ceiling && !self.used.contains(&result) {
                    moves.push(mv);
                }
            }
        }

        for operand in MIN_OPERAND..=MAX_OPERAND {
            let mv = Move::divide(operand);
            if let Some(result) = mv.result(self.current) {
                if !self.used.contains(&result) {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    /// Apply a move, producing the successor position.
    ///
    /// The move is re-validated against this position's legal moves, so a
    /// move enumerated against a stale copy cannot be replayed here. The
    /// parent state is never touched: on failure nothing happens, on
    /// success the caller gets a new value with the result appended, the
    /// used set grown by one, and the mover flipped.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMoveError` when the move is not in `legal_moves`.
    pub fn apply(&self, mv: Move) -> Result<GameState, IllegalMoveError> {
        let result = self
            .legal_moves()
            .iter()
            .find(|&&legal| legal == mv)
            .and_then(|legal| legal.result(self.current))
            .ok_or(IllegalMoveError {
                mv,
                current: self.current,
            })?;

        let mut used = self.used.clone();
        used.insert(result);
        let mut history = self.history.clone();
        history.push_back(result);

        Ok(Self {
            current: result,
            ceiling: self.ceiling,
            used,
            history,
            mover: self.mover.opponent(),
        })
    }

    /// Whether this position has no legal moves.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// The winner of a finished duel: the opponent of the stuck mover.
    ///
    /// `None` while moves remain.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.is_terminal().then(|| self.mover.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::moves::Op;

    #[test]
    fn test_new_state_shape() {
        let state = GameState::new(100);

        assert_eq!(state.current_number(), 1);
        assert_eq!(state.ceiling(), 100);
        assert_eq!(state.mover(), Player::One);
        assert!(state.used_numbers().contains(&1));
        assert_eq!(state.used_numbers().len(), 1);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history().back(), Some(&1));
    }

    #[test]
    fn test_with_mover() {
        let state = GameState::new(100).with_mover(Player::Two);
        assert_eq!(state.mover(), Player::Two);
    }

    #[test]
    fn test_opening_moves_at_ceiling_ten() {
        let state = GameState::new(10);
        let moves = state.legal_moves();

        // From 1 every product 2..=10 fits under the ceiling and is
        // unused; 1 divides evenly by nothing in range.
        let expected: Vec<Move> = (2..=10).map(Move::multiply).collect();
        assert_eq!(moves.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_move_order_is_multiplies_then_divides() {
        let state = GameState::new(100)
            .apply(Move::multiply(6))
            .unwrap();

        let moves = state.legal_moves();
        let first_divide = moves
            .iter()
            .position(|mv| mv.op == Op::Divide)
            .expect("6 has exact divisions");

        assert!(moves[..first_divide].iter().all(|mv| mv.op == Op::Multiply));
        assert!(moves[first_divide..].iter().all(|mv| mv.op == Op::Divide));

        // Ascending operands within each group.
        let multiply_ops: Vec<u64> = moves[..first_divide].iter().map(|mv| mv.operand).collect();
        let divide_ops: Vec<u64> = moves[first_divide..].iter().map(|mv| mv.operand).collect();
        assert!(multiply_ops.windows(2).all(|w| w[0] < w[1]));
        assert!(divide_ops.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_apply_advances_chain() {
        let state = GameState::new(10);
        let next = state.apply(Move::multiply(7)).unwrap();

        assert_eq!(next.current_number(), 7);
        assert!(next.used_numbers().contains(&1));
        assert!(next.used_numbers().contains(&7));
        assert_eq!(next.used_numbers().len(), 2);
        assert_eq!(
            next.history().iter().copied().collect::<Vec<_>>(),
            vec![1, 7]
        );
        assert_eq!(next.mover(), Player::Two);
    }

    #[test]
    fn test_apply_leaves_parent_untouched() {
        let state = GameState::new(10);
        let _next = state.apply(Move::multiply(7)).unwrap();

        assert_eq!(state.current_number(), 1);
        assert_eq!(state.used_numbers().len(), 1);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.mover(), Player::One);
    }

    #[test]
    fn test_seven_at_ceiling_ten_is_terminal() {
        let state = GameState::new(10).apply(Move::multiply(7)).unwrap();

        assert!(state.legal_moves().is_empty());
        assert!(state.is_terminal());
        // Player::One moved to 7, so the stuck Player::Two loses.
        assert_eq!(state.winner(), Some(Player::One));
    }

    #[test]
    fn test_winner_is_none_before_the_end() {
        let state = GameState::new(100);
        assert!(!state.is_terminal());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_apply_rejects_product_above_ceiling() {
        let state = GameState::new(10).apply(Move::multiply(6)).unwrap();
        let err = state.apply(Move::multiply(2)).unwrap_err();

        assert_eq!(err.mv, Move::multiply(2));
        assert_eq!(err.current, 6);
    }

    #[test]
    fn test_apply_rejects_inexact_division() {
        let state = GameState::new(100).apply(Move::multiply(7)).unwrap();
        assert!(state.apply(Move::divide(2)).is_err());
    }

    #[test]
    fn test_apply_rejects_repeated_number() {
        let state = GameState::new(100).apply(Move::multiply(2)).unwrap();
        // 2 / 2 would reproduce the starting 1.
        assert!(state.apply(Move::divide(2)).is_err());
    }

    #[test]
    fn test_apply_rejects_out_of_range_operand() {
        let state = GameState::new(100);
        assert!(state.apply(Move::multiply(1)).is_err());
        assert!(state.apply(Move::multiply(11)).is_err());
        assert!(state.apply(Move::divide(0)).is_err());
    }

    #[test]
    fn test_divisions_ignore_the_ceiling() {
        // Divisions carry no ceiling comparison: an exact, unused
        // quotient is always legal.
        let state = GameState::new(40)
            .apply(Move::multiply(5))
            .unwrap()
            .apply(Move::multiply(8))
            .unwrap();

        assert_eq!(state.current_number(), 40);
        let next = state.apply(Move::divide(2)).unwrap();
        assert_eq!(next.current_number(), 20);
    }

    #[test]
    fn test_error_display() {
        let err = IllegalMoveError {
            mv: Move::divide(3),
            current: 10,
        };
        assert_eq!(err.to_string(), "move /3 is not legal from 10");
    }

    #[test]
    fn test_serialization_round_trip() {
        let state = GameState::new(50)
            .apply(Move::multiply(4))
            .unwrap()
            .apply(Move::multiply(9))
            .unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, state);
    }
}
