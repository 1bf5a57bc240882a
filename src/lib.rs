//! RaceTracker - Two-participant progress race
//!
//! Two simulated participants advance their progress concurrently once the
//! race is started. The race can be paused, resumed and reset at any time.

pub mod config;
pub mod racing;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use racing::{ParticipantConfig, RaceCoordinator, RaceError, RaceParticipant, RaceState};
