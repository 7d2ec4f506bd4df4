//! Move representation: an arithmetic operator applied to the running number.
//!
//! A move is a plain value pair of operator and operand. Anyone can build
//! one (including from text typed at a prompt); whether it is *legal* in a
//! given position is the state's concern, not the move's.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

/// Smallest operand a move may carry.
pub const MIN_OPERAND: u64 = 2;

/// Largest operand a move may carry.
pub const MAX_OPERAND: u64 = 10;

/// The operator half of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// Multiply the running number by the operand.
    Multiply,
    /// Divide the running number by the operand.
    Divide,
}

impl Op {
    /// The single-character prompt form of this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Op::Multiply => '*',
            Op::Divide => '/',
        }
    }
}

/// A complete move: operator plus operand.
///
/// Fields are public; construct moves freely. `GameState::apply` rejects
/// anything that is not legal in the position it is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The operator.
    pub op: Op,
    /// The operand, in `MIN_OPERAND..=MAX_OPERAND` for any legal move.
    pub operand: u64,
}

impl Move {
    /// A multiplication move.
    #[must_use]
    pub const fn multiply(operand: u64) -> Self {
        Self {
            op: Op::Multiply,
            operand,
        }
    }

    /// A division move.
    #[must_use]
    pub const fn divide(operand: u64) -> Self {
        Self {
            op: Op::Divide,
            operand,
        }
    }

    /// The number this move would produce from `current`.
    ///
    /// Returns `None` when the operand is outside
    /// `MIN_OPERAND..=MAX_OPERAND`, the product overflows `u64`, or the
    /// division would leave a remainder. The ceiling and no-repeat rules
    /// live on `GameState`, which also owns the final say on legality.
    #[must_use]
    pub fn result(self, current: u64) -> Option<u64> {
        if !(MIN_OPERAND..=MAX_OPERAND).contains(&self.operand) {
            return None;
        }
        match self.op {
            Op::Multiply => current.checked_mul(self.operand),
            Op::Divide => (current % self.operand == 0).then(|| current / self.operand),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.op.symbol(), self.operand)
    }
}

/// Error from parsing move text such as `*5` or `/2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseMoveError;

impl std::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected an operator (* or /) followed by an integer")
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses the prompt form: an operator character followed by an
    /// integer, e.g. `*5` or `/2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (op, digits) = if let Some(rest) = s.strip_prefix('*') {
            (Op::Multiply, rest)
        } else if let Some(rest) = s.strip_prefix('/') {
            (Op::Divide, rest)
        } else {
            return Err(ParseMoveError);
        };

        let operand = digits.trim().parse().map_err(|_| ParseMoveError)?;
        Ok(Self { op, operand })
    }
}

/// A list of moves, sized for the worst-case branching factor (nine
/// multiplications plus nine divisions) without heap allocation.
pub type MoveList = SmallVec<[Move; 18]>;
