//! # numduel
//!
//! A two-player turn-based arithmetic duel. Players alternately multiply or
//! divide a shared running number by an integer in 2..=10. A number that has
//! already appeared in the chain may never be produced again, and a
//! multiplication may not push the number above the game's ceiling. The
//! player left without a legal move loses.
//!
//! ## Design Principles
//!
//! 1. **Value-Semantic State**: Applying a move never mutates the parent
//!    position; it produces a fresh `GameState`. Sibling branches in a
//!    search cannot observe each other's updates.
//!
//! 2. **Persistent Data Structures**: The used-number set and the chain
//!    history use `im`, so cloning a position is O(1) structural sharing.
//!
//! 3. **Derived Terminality**: A position is over exactly when it has no
//!    legal moves. There is no cached game-over flag to invalidate.
//!
//! ## Modules
//!
//! - `core`: Players, moves, and the duel state with its rules
//! - `search`: Exhaustive minimax plus a random baseline, behind a
//!   `Strategy` seam
//! - `session`: One interactive duel, threading an explicit state value

pub mod core;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameState, IllegalMoveError, Move, MoveList, Op, ParseMoveError, Player,
    MAX_OPERAND, MIN_OPERAND,
};

pub use crate::search::{MinimaxSearch, RandomStrategy, SearchConfig, SearchStats, Strategy};

pub use crate::session::Session;
