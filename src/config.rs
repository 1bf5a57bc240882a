//! Application configuration.
//!
//! Settings are read from `config.toml` in the platform data directory. A
//! missing file yields the defaults; nothing is ever written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::racing::{ParticipantConfig, RaceError, RaceParticipant};

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreference::Dark => write!(f, "Dark"),
            ThemePreference::Light => write!(f, "Light"),
        }
    }
}

/// Settings for one race participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticipantSettings {
    /// Display name
    pub name: String,
    /// Upper bound on progress
    pub max_progress: i32,
    /// Delay between ticks in milliseconds
    pub progress_delay_ms: u64,
    /// Amount added per tick
    pub progress_increment: i32,
    /// Starting progress
    pub initial_progress: i32,
}

impl Default for ParticipantSettings {
    fn default() -> Self {
        Self::named("Player", 1)
    }
}

impl ParticipantSettings {
    /// Default settings with the given name and increment.
    pub fn named(name: &str, progress_increment: i32) -> Self {
        let defaults = ParticipantConfig::default();
        Self {
            name: name.to_string(),
            max_progress: defaults.max_progress,
            progress_delay_ms: defaults.progress_delay.as_millis() as u64,
            progress_increment,
            initial_progress: defaults.initial_progress,
        }
    }

    /// Convert to participant construction parameters.
    pub fn participant_config(&self) -> ParticipantConfig {
        ParticipantConfig {
            max_progress: self.max_progress,
            progress_delay: Duration::from_millis(self.progress_delay_ms),
            progress_increment: self.progress_increment,
            initial_progress: self.initial_progress,
        }
    }

    /// Build the participant, validating the settings.
    pub fn build(&self) -> Result<RaceParticipant, RaceError> {
        RaceParticipant::new(self.name.clone(), self.participant_config())
    }
}

/// Race settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceSettings {
    /// First participant
    pub player_one: ParticipantSettings,
    /// Second participant
    pub player_two: ParticipantSettings,
}

impl Default for RaceSettings {
    fn default() -> Self {
        Self {
            player_one: ParticipantSettings::named("Player 1", 1),
            player_two: ParticipantSettings::named("Player 2", 2),
        }
    }
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Theme preference
    pub theme: ThemePreference,
    /// Font scale multiplier
    pub font_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Dark,
            font_scale: 1.0,
        }
    }
}

/// Accepted range for `font_scale`.
pub const FONT_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.5..=3.0;

impl UiSettings {
    /// Zoom factor for egui. Out-of-range or non-finite scales fall back to 1.0.
    pub fn zoom_factor(&self) -> f32 {
        if FONT_SCALE_RANGE.contains(&self.font_scale) {
            self.font_scale
        } else {
            tracing::warn!(
                "font_scale={} outside {:?}, using 1.0",
                self.font_scale,
                FONT_SCALE_RANGE
            );
            1.0
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Race settings
    pub race: RaceSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl AppConfig {
    /// Build both participants from the race settings.
    pub fn build_participants(&self) -> Result<(RaceParticipant, RaceParticipant), RaceError> {
        Ok((self.race.player_one.build()?, self.race.player_two.build()?))
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "racetracker", "RaceTracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
