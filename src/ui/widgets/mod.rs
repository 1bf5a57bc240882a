//! UI widgets for reusable components.

pub mod race_control;
pub mod status_indicator;

pub use race_control::{RaceControl, RaceControlAction};
pub use status_indicator::StatusIndicator;
