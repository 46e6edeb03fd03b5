//! Plain-text board drawing.

use std::fmt::Write;

use chess_core::{Position, Square};

/// Board with rank 8 on top, files along the bottom, '.' for empty squares.
pub fn board_text(pos: &Position) -> String {
    let mut out = String::with_capacity(200);
    for row in 0..8u8 {
        let _ = write!(out, "{} ", 8 - row);
        for col in 0..8u8 {
            let cell = Square::new(row, col)
                .and_then(|sq| pos.piece_at(sq))
                .map_or('.', |pc| pc.letter());
            out.push(' ');
            out.push(cell);
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}
