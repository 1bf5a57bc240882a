//! Racing module for the two-participant race.
//!
//! Provides the participant progress loop and the coordinator that starts,
//! pauses and resets both participants together.

pub mod coordinator;
pub mod participant;

// Re-export commonly used types
pub use coordinator::{RaceCoordinator, RaceState};
pub use participant::{ParticipantConfig, RaceParticipant};

/// Racing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RaceError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
