//! Classical Chess Engine
//!
//! Minimax search with alpha-beta pruning over a material plus
//! piece-square evaluation. This is the slow path of the automated
//! player when the experience cache has nothing to offer.

mod eval;
mod search;

use chess_core::{Engine, Position, SearchLimits, SearchResult};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning, white maximizing
/// - Material plus piece-square evaluation
/// - An optional deterministic node budget
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes expanded by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        let outcome = search::pick_best_move(pos, limits);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: limits.depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Classical minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, piece_value, square_bonus, PIECE_VALUES};
pub use search::{pick_best_move, search, search_with, SearchOutcome, INFINITY, MATE};
