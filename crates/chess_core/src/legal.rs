//! Legality filter: simulate every pseudo move on a clone and drop the
//! ones that leave the mover's own king attacked.
//!
//! This is the dominant cost of the whole engine. An incremental
//! make/unmake with cached attack maps would give identical results.

use crate::{
    attacks::in_check,
    board::Position,
    movegen::{classify, pseudo_moves_into},
    types::*,
};

/// Generate all legal moves for `color`, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, color, &mut out);
    out
}

/// Legal moves for the side to move.
pub fn side_legal_moves(pos: &Position) -> Vec<Move> {
    legal_moves(pos, pos.side_to_move)
}

/// Generate all legal moves for `color` into the provided buffer, reusing it
/// across calls. Order is board order of the origin square, then generation
/// order of destinations.
pub fn legal_moves_into(pos: &Position, color: Color, out: &mut Vec<Move>) {
    out.clear();
    let mut dests = Vec::with_capacity(28);
    for from in pos.squares_of(color) {
        dests.clear();
        pseudo_moves_into(pos, from, &mut dests);
        collect_legal(pos, from, &dests, color, out);
    }
}

/// Legal moves of the piece standing on `from`. Empty if the square is
/// empty or holds a piece of the side not to move.
pub fn legal_moves_from(pos: &Position, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(pc) = pos.piece_at(from)
        && pc.color == pos.side_to_move
    {
        let mut dests = Vec::with_capacity(28);
        pseudo_moves_into(pos, from, &mut dests);
        collect_legal(pos, from, &dests, pc.color, &mut out);
    }
    out
}

fn collect_legal(pos: &Position, from: Square, dests: &[Square], color: Color, out: &mut Vec<Move>) {
    let Some(piece) = pos.piece_at(from) else {
        return;
    };
    for &to in dests {
        let mv = classify(pos, from, to, piece);
        let probe = pos.after(mv);
        if !in_check(&probe, color) {
            out.push(mv);
        }
    }
}

#[cfg(test)]
#[path = "legal_tests.rs"]
mod legal_tests;
