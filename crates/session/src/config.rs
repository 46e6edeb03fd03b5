//! TOML configuration. Every field has a default, so an empty or missing
//! file gives a playable setup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chess_core::{Color, SearchLimits, TerminalScoring};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub experience: ExperienceConfig,
    pub profile: ProfileConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: u8,
    pub max_nodes: Option<u64>,
    pub terminal_scoring: TerminalScoring,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            max_nodes: None,
            terminal_scoring: TerminalScoring::Static,
        }
    }
}

impl SearchConfig {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            depth: self.depth,
            max_nodes: self.max_nodes,
            terminal: self.terminal_scoring,
        }
    }
}

/// When outcomes of automated moves are written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingPolicy {
    /// Hold moves until the game ends, then record the real result.
    #[default]
    Deferred,
    /// Record a win right after each automated move.
    Immediate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceConfig {
    pub path: PathBuf,
    pub prune_after_days: u32,
    pub recording: RecordingPolicy,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("learning_cache.json"),
            prune_after_days: 21,
            recording: RecordingPolicy::Deferred,
        }
    }
}

impl ExperienceConfig {
    pub fn prune_window(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.prune_after_days))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub path: PathBuf,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("player_profile.json"),
        }
    }
}

/// Which sides the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Automated {
    White,
    #[default]
    Black,
    Both,
    None,
}

impl Automated {
    pub fn controls(self, color: Color) -> bool {
        match self {
            Automated::White => color == Color::White,
            Automated::Black => color == Color::Black,
            Automated::Both => true,
            Automated::None => false,
        }
    }

    /// True if at least one side is played by a human.
    pub fn has_human(self) -> bool {
        self != Automated::Both
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub automated: Automated,
    /// Seed for the random fallback; entropy when absent
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads `path`; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::from_toml_str(&contents)?;
                info!(path = %path.display(), "config loaded");
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
