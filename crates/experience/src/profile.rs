//! Habits of the human player, accumulated across games.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chess_core::{Move, PieceKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ExperienceError;
use crate::json_file;

/// Queen moves within this many of the player's own moves count as a quick
/// deploy.
pub const QUICK_QUEEN_WINDOW: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    #[serde(skip)]
    path: Option<PathBuf>,
    /// First move of each game in coordinate notation -> times played
    pub openings: BTreeMap<String, u32>,
    /// Games in which the player castled
    pub castling_count: u32,
    /// Games in which the player moved the queen early
    pub quick_queen_deploys: u32,
    pub total_games: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PlayerProfile {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn try_load(path: impl Into<PathBuf>) -> Result<Self, ExperienceError> {
        let path = path.into();
        let mut profile: PlayerProfile = json_file::read(&path)?.unwrap_or_default();
        info!(path = %path.display(), games = profile.total_games, "player profile loaded");
        profile.path = Some(path);
        Ok(profile)
    }

    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_load(path.clone()) {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "player profile unusable, starting fresh");
                Self {
                    path: Some(path),
                    ..Self::default()
                }
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Folds one finished game into the profile. `moves` are the player's
    /// own moves in order.
    pub fn update(&mut self, moves: &[Move]) {
        self.update_at(moves, Utc::now());
    }

    pub fn update_at(&mut self, moves: &[Move], now: DateTime<Utc>) {
        self.total_games += 1;
        if let Some(first) = moves.first() {
            *self.openings.entry(first.to_string()).or_insert(0) += 1;
        }
        if moves.iter().any(|m| m.is_castle) {
            self.castling_count += 1;
        }
        if moves
            .iter()
            .take(QUICK_QUEEN_WINDOW)
            .any(|m| m.piece.kind == PieceKind::Queen)
        {
            self.quick_queen_deploys += 1;
        }
        self.updated_at = Some(now);
    }

    pub fn save(&self) -> Result<(), ExperienceError> {
        match &self.path {
            Some(path) => json_file::write(path, self),
            None => Ok(()),
        }
    }

    /// Openings sorted by how often they were played, most frequent first.
    pub fn opening_preferences(&self) -> Vec<(&str, u32)> {
        let mut prefs: Vec<(&str, u32)> = self
            .openings
            .iter()
            .map(|(mv, n)| (mv.as_str(), *n))
            .collect();
        prefs.sort_by(|a, b| b.1.cmp(&a.1));
        prefs
    }

    pub fn castling_rate(&self) -> f64 {
        self.rate(self.castling_count)
    }

    pub fn aggression_score(&self) -> f64 {
        self.rate(self.quick_queen_deploys)
    }

    fn rate(&self, count: u32) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        f64::from(count) / f64::from(self.total_games)
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod profile_tests;
