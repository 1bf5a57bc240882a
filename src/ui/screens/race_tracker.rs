//! Race tracker screen.
//!
//! Displays both participants' progress and the race controls.

use egui::{RichText, Ui};

use crate::racing::RaceCoordinator;
use crate::ui::theme::Theme;
use crate::ui::widgets::{RaceControl, RaceControlAction, StatusIndicator};

/// Glyph shown above the status indicators.
const WALK_ICON: &str = "🚶";

/// Race tracker screen UI.
pub struct RaceTrackerScreen;

impl RaceTrackerScreen {
    /// Render the screen and return the control action requested, if any.
    pub fn show(ui: &mut Ui, race: &RaceCoordinator, theme: Theme) -> Option<RaceControlAction> {
        let mut action = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("Run a race").size(28.0).strong());
                ui.add_space(16.0);
                ui.label(RichText::new(WALK_ICON).size(40.0));
                ui.add_space(16.0);
            });

            ui.add_space(8.0);
            for participant in race.participants() {
                StatusIndicator::new(participant, theme).show(ui);
                ui.add_space(24.0);
            }

            action = RaceControl::show(ui, race.is_running(), theme);
        });

        action
    }
}
