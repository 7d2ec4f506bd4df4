//! Depth-limited exhaustive minimax.
//!
//! Scores are always taken from `Player::Two`'s perspective: positive
//! means the machine seat wins, negative means it loses, zero means the
//! horizon cut the search off before a verdict. The top-level call starts
//! maximizing regardless of which player is the literal mover, so a
//! searcher seated as `Player::One` still plays `Player::Two`'s
//! preferences.
//!
//! The tree is explored exhaustively: every legal move at every node, in
//! the fixed enumeration order, down to the depth budget. Equal scores
//! keep the earliest move seen.

use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::core::{GameState, Move, Player};

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::strategy::Strategy;

/// Transposition key: everything a subtree score depends on.
///
/// The used set is stored sorted so that equal sets compare and hash
/// equal regardless of insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct TableKey {
    current: u64,
    mover: Player,
    used: Vec<u64>,
    depth: u8,
    maximizing: bool,
}

impl TableKey {
    fn for_state(state: &GameState, depth: u8, maximizing: bool) -> Self {
        let mut used: Vec<u64> = state.used_numbers().iter().copied().collect();
        used.sort_unstable();
        Self {
            current: state.current_number(),
            mover: state.mover(),
            used,
            depth,
            maximizing,
        }
    }
}

/// Leaf score for a position with `depth_remaining` plies of budget left.
///
/// Terminal positions score `10 - depth_remaining` when `Player::Two` has
/// won and `depth_remaining - 10` when it has lost. A non-terminal
/// position at the horizon is neutral.
fn evaluate(state: &GameState, depth_remaining: u8) -> i32 {
    match state.winner() {
        Some(Player::Two) => 10 - i32::from(depth_remaining),
        Some(Player::One) => i32::from(depth_remaining) - 10,
        None => 0,
    }
}

/// Exhaustive minimax searcher.
///
/// Owns its configuration, statistics, and (when enabled) a transposition
/// table. The table is cleared at the start of every `choose_move` call,
/// so a searcher can be reused across positions and even across games
/// with different ceilings.
pub struct MinimaxSearch {
    config: SearchConfig,
    table: FxHashMap<TableKey, i32>,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// New searcher with the given configuration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            table: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// The searcher's configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent `choose_move` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best move for the position, or `None` if it is terminal
    /// or the depth budget is zero.
    ///
    /// Always evaluates with `Player::Two` as the maximizing side. Equal
    /// scores keep the earliest move in enumeration order, so repeated
    /// calls with the same position and configuration return the same
    /// move.
    #[instrument(
        level = "debug",
        skip_all,
        fields(current = state.current_number(), depth = self.config.depth_budget)
    )]
    pub fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();
        self.table.clear();

        let (score, mv) = self.minimax(state, self.config.depth_budget, true);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            ?mv,
            score,
            nodes = self.stats.nodes_visited,
            "search finished"
        );
        mv
    }

    /// Recursive step. Returns the subtree score and, for interior nodes,
    /// the move that achieves it.
    fn minimax(&mut self, state: &GameState, depth: u8, maximizing: bool) -> (i32, Option<Move>) {
        self.stats.nodes_visited += 1;

        let moves = state.legal_moves();
        if depth == 0 || moves.is_empty() {
            self.stats.leaves_evaluated += 1;
            return (evaluate(state, depth), None);
        }

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for &mv in &moves {
            // legal_moves only yields applicable moves
            let Ok(child) = state.apply(mv) else { continue };
            let score = self.subtree_score(&child, depth - 1, !maximizing);

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_move = Some(mv);
            }
        }

        (best_score, best_move)
    }

    /// Score one child subtree, answering from the transposition table
    /// when it is enabled and holds the position.
    fn subtree_score(&mut self, state: &GameState, depth: u8, maximizing: bool) -> i32 {
        if !self.config.use_table {
            return self.minimax(state, depth, maximizing).0;
        }

        let key = TableKey::for_state(state, depth, maximizing);
        if let Some(&score) = self.table.get(&key) {
            self.stats.table_hits += 1;
            return score;
        }

        let score = self.minimax(state, depth, maximizing).0;
        self.table.insert(key, score);
        score
    }
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Strategy for MinimaxSearch {
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        MinimaxSearch::choose_move(self, state)
    }
}
