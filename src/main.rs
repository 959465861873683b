mod app;
mod data;
mod graph;
mod state;
mod ui;
mod views;

use app::SignalScopeApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SignalScope")
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SignalScope",
        options,
        Box::new(|cc| Ok(Box::new(SignalScopeApp::new(cc)))),
    )
}
