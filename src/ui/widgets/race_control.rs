//! Start/Pause and Reset buttons.

use egui::{RichText, Stroke, Ui, Vec2};

use crate::ui::theme::Theme;

/// User intent forwarded from the race controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceControlAction {
    /// Start (`true`) or pause (`false`) the race
    ToggleRun(bool),
    /// Reset both participants
    Reset,
}

/// Label of the primary button for the given run state.
pub fn run_button_label(is_running: bool) -> &'static str {
    if is_running {
        "Pause"
    } else {
        "Start"
    }
}

/// Race control buttons.
pub struct RaceControl;

impl RaceControl {
    /// Render the buttons and return the requested action, if any.
    pub fn show(ui: &mut Ui, is_running: bool, theme: Theme) -> Option<RaceControlAction> {
        let mut action = None;
        let palette = theme.palette();
        let button_size = Vec2::new(ui.available_width(), 44.0);

        if ui
            .add_sized(
                button_size,
                egui::Button::new(RichText::new(run_button_label(is_running)).size(18.0))
                    .fill(palette.track_fill),
            )
            .clicked()
        {
            action = Some(RaceControlAction::ToggleRun(!is_running));
        }

        ui.add_space(12.0);

        // Outlined
        if ui
            .add_sized(
                button_size,
                egui::Button::new(RichText::new("Reset").size(18.0))
                    .fill(egui::Color32::TRANSPARENT)
                    .stroke(Stroke::new(1.0, palette.outline)),
            )
            .clicked()
        {
            action = Some(RaceControlAction::Reset);
        }

        action
    }
}
