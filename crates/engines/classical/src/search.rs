//! Minimax search with alpha-beta pruning.
//!
//! White maximizes, black minimizes. Every explored move is applied to a
//! clone of the node's position; the caller's position is never touched.

use chess_core::{
    legal_moves_into, Color, Move, NodeBudget, Position, SearchLimits, TerminalScoring,
};
use tracing::debug;

use crate::eval::evaluate;

/// Bound wider than any reachable score.
pub const INFINITY: i32 = 1_000_000;

/// Score of being checkmated at the root under `TerminalScoring::MateAware`.
pub const MATE: i32 = 100_000;

/// Result of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Score from white's perspective
    pub score: i32,
    /// Best move at the root (None at a terminal or depth-0 root)
    pub best_move: Option<Move>,
    /// Nodes visited
    pub nodes: u64,
    /// True if the node budget forced static scoring somewhere
    pub stopped: bool,
}

/// Plain minimax entry point: full tree to `depth`, static scoring of
/// move-less nodes.
pub fn search(
    pos: &Position,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> (i32, Option<Move>) {
    let outcome = search_with(pos, depth, alpha, beta, maximizing, SearchLimits::depth(depth));
    (outcome.score, outcome.best_move)
}

/// Minimax bounded by `limits` (node budget and terminal scoring).
/// `limits.depth` is ignored in favor of the explicit `depth`.
pub fn search_with(
    pos: &Position,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    limits: SearchLimits,
) -> SearchOutcome {
    let mut searcher = Searcher {
        budget: limits.budget(),
        terminal: limits.terminal,
        stopped: false,
    };
    let (score, best_move) = searcher.minimax(pos, depth, 0, alpha, beta, maximizing);
    SearchOutcome {
        score,
        best_move,
        nodes: searcher.budget.used(),
        stopped: searcher.stopped,
    }
}

/// Searches the side to move's best reply to `limits.depth` plies.
pub fn pick_best_move(pos: &Position, limits: SearchLimits) -> SearchOutcome {
    let maximizing = pos.side_to_move == Color::White;
    let outcome = search_with(pos, limits.depth, -INFINITY, INFINITY, maximizing, limits);
    debug!(
        depth = limits.depth,
        nodes = outcome.nodes,
        score = outcome.score,
        stopped = outcome.stopped,
        best = ?outcome.best_move.map(|m| m.to_string()),
        "search finished"
    );
    outcome
}

struct Searcher {
    budget: NodeBudget,
    terminal: TerminalScoring,
    stopped: bool,
}

impl Searcher {
    fn minimax(
        &mut self,
        pos: &Position,
        depth: u8,
        ply: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        if depth == 0 {
            return (evaluate(pos), None);
        }
        if self.budget.exhausted() {
            self.stopped = true;
            return (evaluate(pos), None);
        }
        self.budget.spend();

        let mut moves = Vec::with_capacity(64);
        legal_moves_into(pos, pos.side_to_move, &mut moves);
        if moves.is_empty() {
            return (self.terminal_score(pos, ply), None);
        }

        let mut best_move = None;
        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let child = pos.after(mv);
                let (v, _) = self.minimax(&child, depth - 1, ply + 1, alpha, beta, false);
                if v > best {
                    best = v;
                    best_move = Some(mv);
                }
                alpha = alpha.max(v);
                if beta <= alpha {
                    break;
                }
            }
            (best, best_move)
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let child = pos.after(mv);
                let (v, _) = self.minimax(&child, depth - 1, ply + 1, alpha, beta, true);
                if v < best {
                    best = v;
                    best_move = Some(mv);
                }
                beta = beta.min(v);
                if beta <= alpha {
                    break;
                }
            }
            (best, best_move)
        }
    }

    fn terminal_score(&self, pos: &Position, ply: u8) -> i32 {
        match self.terminal {
            TerminalScoring::Static => evaluate(pos),
            TerminalScoring::MateAware => {
                let side = pos.side_to_move;
                if !pos.in_check(side) {
                    return 0;
                }
                // Quicker mates score higher for the winner.
                let mate = MATE - ply as i32;
                match side {
                    Color::White => -mate,
                    Color::Black => mate,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
