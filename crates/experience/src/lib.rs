//! Experience cache and player profile.
//!
//! Both live in JSON files next to the binary by default and are loaded once
//! per process. A store that cannot be read is treated as empty; gameplay
//! never stops because of persistence.

pub mod error;
mod json_file;
pub mod profile;
pub mod record;
pub mod store;

pub use error::ExperienceError;
pub use profile::PlayerProfile;
pub use record::{ExperienceRecord, Outcome};
pub use store::{ExperienceStore, StoreStats};
