//! Collaborators the session calls out to.

use chess_core::{Color, Move, PieceKind};
use thiserror::Error;

use crate::game::GameEnd;

/// Failure reported by a move listener. The session logs it and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HookError(pub String);

/// Asked once whenever a human pawn reaches the far rank.
pub trait PromotionPrompt {
    /// The piece to promote to. `None` or a non-promotion kind means queen.
    fn choose_promotion(&mut self, color: Color) -> Option<PieceKind>;
}

/// Prompt for fully automated play.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysQueen;

impl PromotionPrompt for AlwaysQueen {
    fn choose_promotion(&mut self, _color: Color) -> Option<PieceKind> {
        Some(PieceKind::Queen)
    }
}

/// Fired after every applied move (sound, logging, redraw).
pub trait MoveListener {
    fn on_move(&mut self, mv: &Move) -> Result<(), HookError>;
}

/// Fired once when a game ends.
pub trait GameEndNotifier {
    fn on_game_end(&mut self, end: &GameEnd);
}
