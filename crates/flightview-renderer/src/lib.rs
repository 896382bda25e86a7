//! # Flightview Renderer
//!
//! Turns the immutable path store plus the current viewport size into an
//! ordered, serializable list of line-draw commands. The window shell
//! consumes the command list; nothing here touches a display surface, so the
//! whole pipeline is a pure function of its inputs.

pub mod render_data;
pub mod viewport;

pub use render_data::{LineCommand, RenderFrame, RenderPath, GRID_SCALE, STROKE_WIDTH};
pub use viewport::Viewport;
