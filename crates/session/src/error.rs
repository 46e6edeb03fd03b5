use std::io;
use std::path::PathBuf;

use chess_core::Square;
use thiserror::Error;

/// Errors surfaced to the caller of a game session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("the game is over")]
    GameOver,

    #[error("no legal moves for the side to move")]
    NoLegalMoves,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
