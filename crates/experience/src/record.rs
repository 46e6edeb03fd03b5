use chess_core::MoveKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a game from the recording side's point of view.
///
/// Persisted as its sign: -1, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    pub fn sign(self) -> i8 {
        match self {
            Outcome::Loss => -1,
            Outcome::Draw => 0,
            Outcome::Win => 1,
        }
    }
}

impl From<Outcome> for i8 {
    fn from(o: Outcome) -> i8 {
        o.sign()
    }
}

impl TryFrom<i8> for Outcome {
    type Error = String;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        match v {
            -1 => Ok(Outcome::Loss),
            0 => Ok(Outcome::Draw),
            1 => Ok(Outcome::Win),
            other => Err(format!("outcome must be -1, 0 or 1, got {other}")),
        }
    }
}

/// One move played from a fingerprinted position and how the game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(rename = "move")]
    pub mv: MoveKey,
    pub outcome: Outcome,
    pub timestamp: DateTime<Utc>,
}
