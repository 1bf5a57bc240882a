//! RaceTracker - Two-participant progress race
//!
//! Main entry point for the application.

use eframe::egui;
use racetracker::config::{load_config, AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RaceTracker v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    // Participant loops run here; the UI thread only blocks on it to join a
    // cancelled race session.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("race-worker")
        .enable_time()
        .build()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("RaceTracker"),
        ..Default::default()
    };

    eframe::run_native(
        "RaceTracker",
        options,
        Box::new(move |cc| Ok(Box::new(app::RaceTrackerApp::new(cc, runtime, &config)?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run UI: {}", e))
}
