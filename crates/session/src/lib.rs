//! Game session: owns the live position, the experience store and the
//! player profile, and sequences human and automated turns.

pub mod config;
pub mod error;
pub mod game;
pub mod hooks;

pub use config::{
    Automated, Config, ExperienceConfig, GameConfig, ProfileConfig, RecordingPolicy, SearchConfig,
};
pub use error::{ConfigError, GameError};
pub use game::{AutoMove, EndReason, GameEnd, GameSession, GameStatus, MoveSource};
pub use hooks::{AlwaysQueen, GameEndNotifier, HookError, MoveListener, PromotionPrompt};
