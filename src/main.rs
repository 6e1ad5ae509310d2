mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::PaperScopeApp;
use data::loader::{self, DEFAULT_DATA_FILE};
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The conventional dump in the working directory is picked up at
    // startup; a malformed one aborts, a missing one just starts empty.
    let mut state = AppState::default();
    let default_path = Path::new(DEFAULT_DATA_FILE);
    if default_path.exists() {
        let dataset = loader::load_file(default_path)
            .with_context(|| format!("loading {DEFAULT_DATA_FILE}"))?;
        log::info!("Loaded {} papers from {DEFAULT_DATA_FILE}", dataset.len());
        state.set_dataset(dataset);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Paperscope – Research Paper Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(PaperScopeApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(())
}
