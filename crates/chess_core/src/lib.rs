pub mod attacks;
pub mod board;
pub mod error;
pub mod fingerprint;
pub mod legal;
pub mod limits;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::*;
pub use fingerprint::Fingerprint;
pub use legal::*;
pub use limits::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move chooser (search, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if the root has no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns, positive favoring white
    pub score: i32,
    /// Search depth requested
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether the node budget cut the search short
    pub stopped: bool,
}

/// Trait that all chess engines must implement.
///
/// Callers must check for a move-less root themselves (checkmate or
/// stalemate); engines answer `best_move: None` there but never treat it
/// as an error.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for logging
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
