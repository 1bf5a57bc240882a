//! Main application state and egui integration.

use eframe::egui;

use racetracker::config::AppConfig;
use racetracker::racing::{RaceCoordinator, RaceError};
use racetracker::ui::screens::RaceTrackerScreen;
use racetracker::ui::theme::Theme;
use racetracker::ui::widgets::RaceControlAction;
use tokio::runtime::Runtime;
use tokio::sync::watch;

/// Main application state.
pub struct RaceTrackerApp {
    /// Race coordinator owning both participants
    race: RaceCoordinator,
    /// Runtime driving the race session
    runtime: Runtime,
    /// UI theme
    theme: Theme,
}

impl RaceTrackerApp {
    /// Create a new application instance.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: Runtime,
        config: &AppConfig,
    ) -> Result<Self, RaceError> {
        let theme = Theme::from(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.zoom_factor());

        let (player_one, player_two) = match config.build_participants() {
            Ok(participants) => participants,
            Err(e) => {
                tracing::warn!("Invalid race settings, using defaults: {}", e);
                AppConfig::default().build_participants()?
            }
        };

        let race = RaceCoordinator::new(runtime.handle().clone(), player_one, player_two);

        // Repaint whenever a progress value or the run state changes.
        for participant in race.participants() {
            spawn_repaint_forwarder(&runtime, participant.subscribe(), cc.egui_ctx.clone());
        }
        spawn_repaint_forwarder(&runtime, race.subscribe_running(), cc.egui_ctx.clone());

        Ok(Self {
            race,
            runtime,
            theme,
        })
    }

    /// Apply a control action from the UI.
    fn handle_action(&mut self, action: RaceControlAction) {
        match action {
            RaceControlAction::ToggleRun(running) => {
                self.runtime.block_on(self.race.toggle_run(running));
            }
            RaceControlAction::Reset => {
                self.runtime.block_on(self.race.reset());
            }
        }
    }

    /// Toggle between dark and light themes.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
    }
}

/// Request a repaint of `ctx` on every change published to `rx`.
fn spawn_repaint_forwarder<T>(runtime: &Runtime, mut rx: watch::Receiver<T>, ctx: egui::Context)
where
    T: Send + Sync + 'static,
{
    runtime.spawn(async move {
        while rx.changed().await.is_ok() {
            ctx.request_repaint();
        }
    });
}

impl eframe::App for RaceTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = None;

        // Space toggles the race
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            action = Some(RaceControlAction::ToggleRun(!self.race.is_running()));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("RaceTracker");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.theme.icon()).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(requested) = RaceTrackerScreen::show(ui, &self.race, self.theme) {
                action = Some(requested);
            }
        });

        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}
