#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod form;
mod results_view;

use app::CoilCalculatorApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("Coil Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Coil Calculator",
        options,
        Box::new(|cc| Ok(Box::new(CoilCalculatorApp::new(cc)))),
    )
}
