//! Coordinate move notation ("e2e4", "e7e8n").

use crate::{board::Position, error::ParseError, legal::side_legal_moves, types::*};

/// Splits coordinate text into origin, destination and optional promotion.
pub fn parse_move_text(txt: &str) -> Result<(Square, Square, Option<PieceKind>), ParseError> {
    let txt = txt.trim();
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(ParseError::BadMove(txt.to_string()));
    }
    let from = Square::from_coord(&txt[0..2]).ok_or_else(|| ParseError::BadSquare(txt[0..2].to_string()))?;
    let to = Square::from_coord(&txt[2..4]).ok_or_else(|| ParseError::BadSquare(txt[2..4].to_string()))?;
    let promo = match txt.len() {
        5 => Some(PieceKind::parse_promotion(&txt[4..5]).ok_or_else(|| ParseError::BadMove(txt.to_string()))?),
        _ => None,
    };
    Ok((from, to, promo))
}

/// Resolves coordinate text against the legal moves of the side to move so
/// that castle/en-passant flags come out right. A promotion letter on a
/// move that does not promote is rejected.
pub fn find_legal_move(pos: &Position, txt: &str) -> Result<Option<Move>, ParseError> {
    let (from, to, promo) = parse_move_text(txt)?;
    let Some(mut mv) = side_legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
    else {
        return Ok(None);
    };
    match (mv.promotion, promo) {
        (None, Some(_)) => return Err(ParseError::BadMove(txt.trim().to_string())),
        (Some(_), Some(kind)) => mv.promotion = Some(kind),
        _ => {}
    }
    Ok(Some(mv))
}

/// Plays a whitespace-separated list of coordinate moves from `pos`.
/// Stops with an error at the first text that is not a legal move.
pub fn play_line(pos: &mut Position, line: &str) -> Result<(), ParseError> {
    for txt in line.split_whitespace() {
        let mv = find_legal_move(pos, txt)?.ok_or_else(|| ParseError::BadMove(txt.to_string()))?;
        pos.apply(mv);
    }
    Ok(())
}
