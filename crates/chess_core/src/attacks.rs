//! Check detection.
//!
//! An attack is answered from the same offset tables and rays the move
//! generator uses, scanning outward from the target square. Pawns attack
//! their two forward diagonals whether or not anything stands there; pawn
//! pushes and castling never attack, so this never recurses into castle
//! generation.

use crate::{
    board::Position,
    movegen::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS},
    types::*,
};

/// True if any piece of color `by` attacks `target`.
pub fn is_square_attacked(pos: &Position, target: Square, by: Color) -> bool {
    let holds = |s: Square, kind: PieceKind| pos.piece_at(s) == Some(Piece::new(by, kind));

    // A `by` pawn attacking target sits one row behind it from `by`'s side.
    let back = -by.forward();
    for dc in [-1, 1] {
        if let Some(s) = target.offset(back, dc)
            && holds(s, PieceKind::Pawn)
        {
            return true;
        }
    }

    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(s) = target.offset(dr, dc)
            && holds(s, PieceKind::Knight)
        {
            return true;
        }
    }

    for (dr, dc) in KING_OFFSETS {
        if let Some(s) = target.offset(dr, dc)
            && holds(s, PieceKind::King)
        {
            return true;
        }
    }

    slider_hits(pos, target, by, &DIAGONALS, PieceKind::Bishop)
        || slider_hits(pos, target, by, &ORTHOGONALS, PieceKind::Rook)
}

fn slider_hits(
    pos: &Position,
    target: Square,
    by: Color,
    dirs: &[(i8, i8)],
    kind: PieceKind,
) -> bool {
    for &(dr, dc) in dirs {
        let mut cur = target.offset(dr, dc);
        while let Some(s) = cur {
            if let Some(pc) = pos.piece_at(s) {
                if pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cur = s.offset(dr, dc);
        }
    }
    false
}

/// True if `c`'s king is attacked. A missing king is not "in check"; the
/// game-end check reports it instead.
pub fn in_check(pos: &Position, c: Color) -> bool {
    match pos.king_sq(c) {
        Some(ksq) => is_square_attacked(pos, ksq, c.other()),
        None => false,
    }
}

impl Position {
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        is_square_attacked(self, target, by)
    }

    pub fn in_check(&self, c: Color) -> bool {
        in_check(self, c)
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
