//! LungAI -- desktop demo of a lung-disease X-ray analysis product.
//!
//! Thin binary entry point. All logic lives in the `lungai-core`
//! and `lungai-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use lungai_core::settings::{Settings, SETTINGS_FILE_NAME};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("LungAI starting");

    let settings = Settings::load_or_default(Path::new(SETTINGS_FILE_NAME));
    let icon = lungai_gui::icon::generate_icon(64);

    // Build application state before opening the window.
    let state = lungai_gui::LungAiState::build(&settings);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("LungAI -- Lung Disease Detection (demo)")
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size([760.0, 520.0])
            .with_icon(icon)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "LungAI",
        options,
        Box::new(|cc| Ok(Box::new(lungai_gui::LungAiApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
