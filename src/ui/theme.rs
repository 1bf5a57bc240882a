//! UI theme definitions.

use egui::{Color32, Visuals};

use crate::config::ThemePreference;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl From<ThemePreference> for Theme {
    fn from(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
        }
    }
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => race_visuals(Visuals::dark(), &DARK_PALETTE),
            Theme::Light => race_visuals(Visuals::light(), &LIGHT_PALETTE),
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon for the theme toggle button.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀",
        }
    }

    /// Color palette for this theme.
    pub fn palette(&self) -> &'static RacePalette {
        match self {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }

    /// Fill color for a participant's progress bar.
    pub fn progress_fill(&self, finished: bool) -> Color32 {
        let palette = self.palette();
        if finished {
            palette.finish_line
        } else {
            palette.track_fill
        }
    }
}

/// Colors used by the race screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RacePalette {
    /// Window background
    pub background: Color32,
    /// Panel background
    pub panel: Color32,
    /// Empty part of a progress track
    pub track: Color32,
    /// Filled part of a progress track while racing
    pub track_fill: Color32,
    /// Filled track once a participant reached its maximum
    pub finish_line: Color32,
    /// Names and headings
    pub text: Color32,
    /// Progress labels
    pub text_muted: Color32,
    /// Outline of the Reset button and widget borders
    pub outline: Color32,
}

/// Night palette.
pub const DARK_PALETTE: RacePalette = RacePalette {
    background: Color32::from_rgb(16, 18, 24),
    panel: Color32::from_rgb(26, 29, 38),
    track: Color32::from_rgb(44, 48, 60),
    track_fill: Color32::from_rgb(72, 140, 240),
    finish_line: Color32::from_rgb(60, 176, 96),
    text: Color32::from_rgb(236, 238, 244),
    text_muted: Color32::from_rgb(150, 156, 170),
    outline: Color32::from_rgb(72, 140, 240),
};

/// Day palette.
pub const LIGHT_PALETTE: RacePalette = RacePalette {
    background: Color32::from_rgb(246, 247, 250),
    panel: Color32::from_rgb(255, 255, 255),
    track: Color32::from_rgb(226, 229, 236),
    track_fill: Color32::from_rgb(30, 110, 220),
    finish_line: Color32::from_rgb(28, 132, 64),
    text: Color32::from_rgb(28, 30, 38),
    text_muted: Color32::from_rgb(98, 102, 114),
    outline: Color32::from_rgb(30, 110, 220),
};

/// Apply a palette on top of egui's base visuals.
fn race_visuals(mut visuals: Visuals, palette: &RacePalette) -> Visuals {
    visuals.window_fill = palette.panel;
    visuals.panel_fill = palette.panel;
    visuals.extreme_bg_color = palette.track;
    visuals.faint_bg_color = palette.background;

    visuals.widgets.active.bg_fill = palette.track_fill;
    visuals.selection.bg_fill = palette.track_fill;

    visuals.widgets.noninteractive.fg_stroke.color = palette.text;
    visuals.widgets.inactive.fg_stroke.color = palette.text;
    visuals.widgets.noninteractive.bg_stroke.color = palette.outline;

    visuals
}
