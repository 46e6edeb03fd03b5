//! Pseudo-legal move generation.
//!
//! Destinations here ignore whether the mover's own king is left in check;
//! `legal` prunes those afterwards.

use crate::{attacks::is_square_attacked, board::Position, types::*};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Column the king starts on.
pub(crate) const KING_HOME_COL: u8 = 4;

/// Destination squares for the piece on `from`, or nothing if `from` is empty.
pub fn pseudo_moves(pos: &Position, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    pseudo_moves_into(pos, from, &mut out);
    out
}

/// Appends the destinations of the piece on `from` to `out`.
pub fn pseudo_moves_into(pos: &Position, from: Square, out: &mut Vec<Square>) {
    let pc = match pos.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
        PieceKind::Knight => gen_leaper(pos, from, pc.color, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => gen_slider(pos, from, pc.color, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(pos, from, pc.color, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(pos, from, pc.color, &DIAGONALS, out);
            gen_slider(pos, from, pc.color, &ORTHOGONALS, out);
        }
        PieceKind::King => {
            gen_leaper(pos, from, pc.color, &KING_OFFSETS, out);
            gen_castle(pos, from, pc.color, out);
        }
    }
}

/// Builds the `Move` for a generated destination, deciding its special
/// flags from the geometry once so application never has to.
pub fn classify(pos: &Position, from: Square, to: Square, piece: Piece) -> Move {
    let mut mv = Move::new(from, to, piece);
    match piece.kind {
        PieceKind::King => {
            mv.is_castle = from.col().abs_diff(to.col()) == 2;
        }
        PieceKind::Pawn => {
            if from.col() != to.col() && pos.piece_at(to).is_none() && pos.en_passant == Some(to) {
                mv.is_en_passant = true;
            }
            if to.row() == piece.color.other().home_row() {
                mv.promotion = Some(PieceKind::Queen);
            }
        }
        _ => {}
    }
    mv
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();
    let start_row = match c {
        Color::White => 6,
        Color::Black => 1,
    };

    // forward 1
    if let Some(to) = from.offset(dir, 0)
        && pos.piece_at(to).is_none()
    {
        out.push(to);

        // forward 2 from start
        if from.row() == start_row
            && let Some(to2) = from.offset(2 * dir, 0)
            && pos.piece_at(to2).is_none()
        {
            out.push(to2);
        }
    }

    // captures + en-passant
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            match pos.piece_at(to) {
                Some(tpc) if tpc.color != c => out.push(to),
                None if pos.en_passant == Some(to) => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_leaper(pos: &Position, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match pos.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match pos.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

fn gen_castle(pos: &Position, from: Square, c: Color, out: &mut Vec<Square>) {
    let row = c.home_row();
    if from.row() != row || from.col() != KING_HOME_COL {
        return;
    }
    let kingside = pos.castling.kingside(c);
    let queenside = pos.castling.queenside(c);
    if !kingside && !queenside {
        return;
    }

    // Can't castle out of check.
    let enemy = c.other();
    if is_square_attacked(pos, from, enemy) {
        return;
    }

    let empty = |col: u8| Square::new(row, col).is_some_and(|s| pos.piece_at(s).is_none());
    let safe = |col: u8| Square::new(row, col).is_some_and(|s| !is_square_attacked(pos, s, enemy));
    let own_rook = |col: u8| {
        Square::new(row, col).and_then(|s| pos.piece_at(s)) == Some(Piece::new(c, PieceKind::Rook))
    };

    // King side: f and g empty, neither attacked.
    if kingside && own_rook(7) && empty(5) && empty(6) && safe(5) && safe(6) {
        out.extend(Square::new(row, 6));
    }
    // Queen side: b, c, d empty; the king only crosses d and c.
    if queenside && own_rook(0) && empty(1) && empty(2) && empty(3) && safe(3) && safe(2) {
        out.extend(Square::new(row, 2));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
