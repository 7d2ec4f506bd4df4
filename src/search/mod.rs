//! Move selection for the machine seat.
//!
//! ## Overview
//!
//! The main strategy is `MinimaxSearch`: a depth-limited, fully exhaustive
//! minimax over the duel tree. No pruning and no move-ordering heuristics
//! beyond the fixed enumeration order of `GameState::legal_moves`; ties
//! keep the earliest move in that order. An optional transposition table
//! memoizes subtree scores for positions reachable through more than one
//! move order without changing which move gets chosen.
//!
//! `RandomStrategy` is a seeded uniform baseline, mostly useful in tests
//! and as a sparring partner.
//!
//! ## Usage
//!
//! ```
//! use numduel::core::GameState;
//! use numduel::search::{MinimaxSearch, SearchConfig};
//!
//! let state = GameState::new(100);
//! let mut search = MinimaxSearch::new(SearchConfig::default().with_depth_budget(6));
//!
//! if let Some(mv) = search.choose_move(&state) {
//!     println!("best move: {mv}");
//! }
//! ```

pub mod config;
pub mod minimax;
pub mod random;
pub mod stats;
pub mod strategy;

pub use config::SearchConfig;
pub use minimax::MinimaxSearch;
pub use random::RandomStrategy;
pub use stats::SearchStats;
pub use strategy::Strategy;
