mod app;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use app::CsvScatterApp;
use config::ViewerConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::from_env();
    log::info!("Starting in {:?} mode", config.variant);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([600.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "CSV Scatter",
        options,
        Box::new(|cc| Ok(Box::new(CsvScatterApp::new(cc, config)))),
    )
}
