mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::ExplorerApp;
use eframe::egui;
use nfhs_explorer::ExplorerConfig;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ExplorerConfig::resolve(std::env::args_os().nth(1).map(PathBuf::from));

    let mut state = AppState::new(config.clone());
    if let Some(path) = &config.dataset_path {
        // A failed start-up load leaves the explorer empty with the error shown.
        state.load_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "NFHS Explorer – Social Factors and Health Outcomes",
        options,
        Box::new(|_cc| Ok(Box::new(ExplorerApp::new(state)))),
    )
}
