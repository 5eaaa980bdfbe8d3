mod anim;
mod app;
mod data;
mod render;
mod state;
mod ui;

use std::path::PathBuf;

use app::TrendApp;
use eframe::egui;

/// Default dataset location; override with the first CLI argument.
const DEFAULT_DATA_PATH: &str = "sample_data/cancer_trends.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
    );

    // The dataset is loaded once and is static for the process lifetime;
    // a load failure is fatal.
    let dataset = match data::loader::load_file(&path) {
        Ok(ds) => {
            log::info!(
                "Loaded {} records from {}: {} counties, {} indicators",
                ds.len(),
                path.display(),
                ds.counties.len(),
                ds.indicators.len()
            );
            ds
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cancer Trends in New York State",
        options,
        Box::new(move |_cc| Ok(Box::new(TrendApp::new(dataset)))),
    )
}
