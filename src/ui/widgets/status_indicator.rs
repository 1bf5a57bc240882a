//! Status indicator widget for a race participant.
//!
//! Shows the participant name next to a progress bar, with the current and
//! maximum progress underneath.

use egui::{Align, Layout, RichText, Ui};

use crate::racing::RaceParticipant;
use crate::ui::theme::Theme;

/// Format a progress value for display.
pub fn progress_label(value: i32) -> String {
    format!("{} %", value)
}

/// Progress bar row for one participant.
pub struct StatusIndicator<'a> {
    participant: &'a RaceParticipant,
    theme: Theme,
}

impl<'a> StatusIndicator<'a> {
    /// Create a status indicator for `participant`.
    pub fn new(participant: &'a RaceParticipant, theme: Theme) -> Self {
        Self { participant, theme }
    }

    /// Render the indicator.
    pub fn show(&self, ui: &mut Ui) {
        let participant = self.participant;
        let palette = self.theme.palette();
        let fill = self.theme.progress_fill(participant.is_finished());

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(participant.name())
                    .size(16.0)
                    .strong()
                    .color(palette.text),
            );
            ui.add_space(8.0);

            ui.vertical(|ui| {
                let progress_bar = egui::ProgressBar::new(participant.progress_factor().min(1.0))
                    .desired_width(ui.available_width())
                    .fill(fill);
                ui.add(progress_bar);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(progress_label(participant.current_progress()))
                            .color(palette.text_muted),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(progress_label(participant.max_progress()))
                                .color(palette.text_muted),
                        );
                    });
                });
            });
        });
    }
}
