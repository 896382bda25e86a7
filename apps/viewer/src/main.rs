//! Flight path viewer: opens an 800x600 window showing the demo path set.

mod app;
mod demo;

use app::ViewerApp;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store = demo::demo_store()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("Flight Paths"),
        ..Default::default()
    };

    eframe::run_native(
        "Flight Paths",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(store)))),
    )?;

    Ok(())
}
