//! Search limits shared by every engine.
//!
//! Limits are deterministic: a fixed depth plus an optional node budget.
//! Two searches with the same position and limits explore the same tree.

use serde::{Deserialize, Serialize};

/// How a node with no legal moves is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalScoring {
    /// Fall back to the static evaluation, same as a depth-exhausted leaf.
    #[default]
    Static,
    /// Checkmate scores as a (ply-adjusted) mate, stalemate as zero.
    MateAware,
}

/// Search limits that control how far an engine explores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum nodes to expand (None = whole tree to `depth`)
    pub max_nodes: Option<u64>,
    /// Scoring of nodes without legal moves
    pub terminal: TerminalScoring,
}

impl SearchLimits {
    /// Create limits with only a depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            max_nodes: None,
            terminal: TerminalScoring::Static,
        }
    }

    /// Create limits with both depth and node-budget constraints.
    pub fn depth_and_nodes(depth: u8, max_nodes: u64) -> Self {
        Self {
            depth,
            max_nodes: Some(max_nodes),
            terminal: TerminalScoring::Static,
        }
    }

    pub fn with_terminal(mut self, terminal: TerminalScoring) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn budget(&self) -> NodeBudget {
        NodeBudget::new(self.max_nodes)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Counts expanded nodes against an optional limit.
#[derive(Debug, Clone)]
pub struct NodeBudget {
    limit: Option<u64>,
    used: u64,
}

impl NodeBudget {
    pub fn new(limit: Option<u64>) -> Self {
        Self { limit, used: 0 }
    }

    /// Record one expanded node.
    #[inline]
    pub fn spend(&mut self) {
        self.used += 1;
    }

    /// True once the budget is used up; nodes after this are scored statically.
    #[inline]
    pub fn exhausted(&self) -> bool {
        self.limit.is_some_and(|l| self.used >= l)
    }

    pub fn used(&self) -> u64 {
        self.used
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
