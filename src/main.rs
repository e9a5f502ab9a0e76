#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use quartz::{Config, QuartzApp};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::debug!("Starting with {config:?}");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quartz")
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([360.0, 280.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Quartz",
        native_options,
        Box::new(|cc| Ok(Box::new(QuartzApp::new(cc, config)))),
    )
}
