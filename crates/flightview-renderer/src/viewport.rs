use serde::{Deserialize, Serialize};

/// Current pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas width in pixels.
    pub width: i32,
    /// Canvas height in pixels.
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Offsets that center a plot of the given pixel size in this viewport.
    ///
    /// Truncating integer division; offsets go negative when the plot is
    /// larger than the viewport, in which case the drawing surface clips.
    pub fn centering_offset(&self, plot_width: i32, plot_height: i32) -> (i32, i32) {
        (
            (self.width - plot_width) / 2,
            (self.height - plot_height) / 2,
        )
    }
}
