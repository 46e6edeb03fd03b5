//! Compact position key for the experience cache.
//!
//! Rows are written top to bottom, one letter per piece (uppercase white,
//! lowercase black), runs of empty squares as a digit, rows joined by '/',
//! then a space and 'w' or 'b' for the side to move. Castling rights and the
//! en-passant target are deliberately not part of the key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Position;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(pos: &Position) -> Self {
        let mut s = String::with_capacity(72);
        for (row_idx, row) in pos.board.iter().enumerate() {
            if row_idx > 0 {
                s.push('/');
            }
            let mut empty = 0u8;
            for cell in row {
                match cell {
                    Some(pc) => {
                        if empty > 0 {
                            s.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        s.push(pc.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                s.push((b'0' + empty) as char);
            }
        }
        s.push(' ');
        s.push(pos.side_to_move.letter());
        Fingerprint(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Fingerprint {
    fn from(s: String) -> Self {
        Fingerprint(s)
    }
}

impl From<&str> for Fingerprint {
    fn from(s: &str) -> Self {
        Fingerprint(s.to_string())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Position {
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self)
    }
}

#[cfg(test)]
#[path = "fingerprint_tests.rs"]
mod fingerprint_tests;
