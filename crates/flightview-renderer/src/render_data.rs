use serde::{Deserialize, Serialize};

use flightview_core::{GridPoint, PathColor, PathStore};

use crate::viewport::Viewport;

/// Pixels per grid unit.
pub const GRID_SCALE: i32 = 50;

/// Stroke width for path segments, in pixels.
pub const STROKE_WIDTH: f32 = 2.0;

/// One line-draw command in pixel coordinates, ready for the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineCommand {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// All line commands for a single flight path, in source segment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPath {
    pub color: PathColor,
    pub lines: Vec<LineCommand>,
}

/// Complete render frame for one repaint, consumed by the window shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub paths: Vec<RenderPath>,
    pub stroke_width: f32,
    pub viewport: Viewport,
}

impl RenderFrame {
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            paths: Vec::new(),
            stroke_width: STROKE_WIDTH,
            viewport,
        }
    }

    /// Build the frame for a store at the given viewport size.
    ///
    /// Pure and stateless: the same store and viewport always produce the
    /// same ordered command list. Grid coordinates are scaled by
    /// [`GRID_SCALE`], centered via the viewport offsets, and y-flipped to
    /// the surface's downward-positive convention. An empty store produces a
    /// frame with no commands.
    pub fn build(store: &PathStore, viewport: Viewport) -> Self {
        let plot_width = store.max_x() * GRID_SCALE;
        let plot_height = store.max_y() * GRID_SCALE;
        let (offset_x, offset_y) = viewport.centering_offset(plot_width, plot_height);

        log::debug!(
            "frame: plot {}x{} in viewport {}x{}, offset ({}, {})",
            plot_width,
            plot_height,
            viewport.width,
            viewport.height,
            offset_x,
            offset_y
        );

        let to_pixel = |p: GridPoint| {
            (
                p.x * GRID_SCALE + offset_x,
                viewport.height - (p.y * GRID_SCALE + offset_y),
            )
        };

        let paths = store
            .iter()
            .map(|(path, color)| RenderPath {
                color,
                lines: path
                    .segments()
                    .map(|(a, b)| {
                        let (x1, y1) = to_pixel(a);
                        let (x2, y2) = to_pixel(b);
                        LineCommand { x1, y1, x2, y2 }
                    })
                    .collect(),
            })
            .collect();

        Self {
            paths,
            stroke_width: STROKE_WIDTH,
            viewport,
        }
    }

    /// Total number of line commands across all paths.
    pub fn line_count(&self) -> usize {
        self.paths.iter().map(|p| p.lines.len()).sum()
    }
}
