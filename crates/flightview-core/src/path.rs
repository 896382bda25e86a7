use serde::{Deserialize, Serialize};

use crate::geometry::GridPoint;

/// A polyline flight path: an ordered sequence of grid points rendered as
/// connected line segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPath {
    points: Vec<GridPoint>,
}

impl FlightPath {
    pub fn new(points: Vec<GridPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs in source order. A path with fewer than two
    /// points yields nothing.
    pub fn segments(&self) -> impl Iterator<Item = (GridPoint, GridPoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Return a new path with every point translated by (dx, dy).
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translate(dx, dy)).collect(),
        }
    }

    pub fn max_x(&self) -> Option<i32> {
        self.points.iter().map(|p| p.x).max()
    }

    pub fn max_y(&self) -> Option<i32> {
        self.points.iter().map(|p| p.y).max()
    }
}
