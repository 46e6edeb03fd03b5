//! Terminal implementations of the session hooks.

use std::io::{self, BufRead, Write};

use chess_core::{Color, Move, PieceKind};
use session::{GameEnd, GameEndNotifier, HookError, MoveListener, PromotionPrompt};

/// Asks on stdin which piece to promote to.
pub struct StdinPrompt;

impl PromotionPrompt for StdinPrompt {
    fn choose_promotion(&mut self, color: Color) -> Option<PieceKind> {
        print!("{color} promotes to (q/r/b/n) [q]: ");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        PieceKind::parse_promotion(line.trim())
    }
}

/// Promotion kind already given in the move text ("e7e8n").
pub struct Preselected(pub PieceKind);

impl PromotionPrompt for Preselected {
    fn choose_promotion(&mut self, _color: Color) -> Option<PieceKind> {
        Some(self.0)
    }
}

/// Prints every move as it is played.
pub struct MoveEcho;

impl MoveListener for MoveEcho {
    fn on_move(&mut self, mv: &Move) -> Result<(), HookError> {
        let mut out = io::stdout().lock();
        writeln!(out, "  {} plays {mv}", mv.piece.color).map_err(|e| HookError(e.to_string()))
    }
}

pub struct Announcer;

impl GameEndNotifier for Announcer {
    fn on_game_end(&mut self, end: &GameEnd) {
        println!("Game over: {end}");
    }
}
