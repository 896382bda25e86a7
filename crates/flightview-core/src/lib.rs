//! # Flightview Core
//!
//! Data model for the flight path viewer: grid-coordinate geometry, polyline
//! paths with display colors, and the immutable path store that feeds the
//! renderer.

pub mod color;
pub mod geometry;
pub mod path;
pub mod store;

pub use color::PathColor;
pub use geometry::{orientation, segments_intersect, GridPoint, Orientation};
pub use path::FlightPath;
pub use store::{PathStore, StoreError, SEPARATION_OFFSET};
