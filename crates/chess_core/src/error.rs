//! Error types for parsing positions and moves.

use thiserror::Error;

/// A `[row, col]` pair outside the 8x8 board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("square [{row}, {col}] is off the board")]
pub struct SquareRangeError {
    pub row: u8,
    pub col: u8,
}

/// Errors produced while parsing FEN strings or coordinate moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid FEN: expected at least 2 fields, got {0}")]
    MissingFields(usize),

    #[error("invalid FEN board section: expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid FEN rank {rank}: {reason}")]
    BadRank { rank: usize, reason: &'static str },

    #[error("invalid piece character '{0}'")]
    BadPiece(char),

    #[error("invalid side to move '{0}'")]
    BadSide(String),

    #[error("invalid castling character '{0}'")]
    BadCastling(char),

    #[error("invalid square '{0}'")]
    BadSquare(String),

    #[error("invalid move text '{0}'")]
    BadMove(String),
}
