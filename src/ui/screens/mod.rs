//! UI screens.

pub mod race_tracker;

pub use race_tracker::RaceTrackerScreen;
