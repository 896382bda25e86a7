use eframe::egui;

use flightview_core::PathStore;
use flightview_renderer::{RenderFrame, Viewport};

/// The viewer window: holds the immutable store and repaints it on every
/// redraw request (initial show, resize, expose).
pub struct ViewerApp {
    store: PathStore,
}

impl ViewerApp {
    pub fn new(store: PathStore) -> Self {
        log::info!(
            "viewer for store '{}' ({} paths)",
            store.name,
            store.path_count()
        );
        Self { store }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let canvas = response.rect;

                let viewport = Viewport::new(canvas.width() as i32, canvas.height() as i32);
                let frame = RenderFrame::build(&self.store, viewport);

                for path in &frame.paths {
                    let stroke = egui::Stroke::new(
                        frame.stroke_width,
                        egui::Color32::from_rgb(path.color.r, path.color.g, path.color.b),
                    );
                    for line in &path.lines {
                        // Commands are viewport-local; shift into the panel's
                        // screen rectangle.
                        painter.line_segment(
                            [
                                canvas.min + egui::vec2(line.x1 as f32, line.y1 as f32),
                                canvas.min + egui::vec2(line.x2 as f32, line.y2 as f32),
                            ],
                            stroke,
                        );
                    }
                }
            });
    }
}
