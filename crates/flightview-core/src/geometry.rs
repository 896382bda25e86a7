use serde::{Deserialize, Serialize};

/// A 2D point in grid coordinates (abstract units, not pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a new point translated by (dx, dy). The receiver is unchanged.
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Turn direction of the ordered triple (p, q, r).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the ordered triple (p, q, r) from the cross-product sign.
///
/// Arithmetic is widened to i128, so any i32 coordinates are safe.
pub fn orientation(p: GridPoint, q: GridPoint, r: GridPoint) -> Orientation {
    let (px, py) = (p.x as i128, p.y as i128);
    let (qx, qy) = (q.x as i128, q.y as i128);
    let (rx, ry) = (r.x as i128, r.y as i128);
    let cross = (qy - py) * (rx - qx) - (qx - px) * (ry - qy);
    match cross {
        0 => Orientation::Collinear,
        c if c > 0 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

/// Whether segment p1–q1 properly crosses segment p2–q2.
///
/// Built from four orientation comparisons. Collinear contact (shared
/// endpoints, overlapping collinear spans) reports `false`.
pub fn segments_intersect(p1: GridPoint, q1: GridPoint, p2: GridPoint, q2: GridPoint) -> bool {
    orientation(p1, q1, p2) != orientation(p1, q1, q2)
        && orientation(p2, q2, p1) != orientation(p2, q2, q1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_returns_new_point() {
        let p = GridPoint::new(1, 1);
        let moved = p.translate(2, 2);
        assert_eq!(moved, GridPoint::new(3, 3));
        assert_eq!(p, GridPoint::new(1, 1));
    }

    #[test]
    fn test_orientation_cases() {
        let origin = GridPoint::new(0, 0);
        assert_eq!(
            orientation(origin, GridPoint::new(1, 1), GridPoint::new(2, 2)),
            Orientation::Collinear
        );
        assert_eq!(
            orientation(origin, GridPoint::new(4, 4), GridPoint::new(2, 1)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(origin, GridPoint::new(4, 4), GridPoint::new(1, 2)),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn test_orientation_no_overflow_at_extremes() {
        let p = GridPoint::new(i32::MIN, i32::MIN);
        let q = GridPoint::new(i32::MAX, i32::MIN);
        let r = GridPoint::new(i32::MAX, i32::MAX);
        // Must not panic on widened arithmetic.
        assert_ne!(orientation(p, q, r), Orientation::Collinear);
    }

    #[test]
    fn test_segments_crossing() {
        assert!(segments_intersect(
            GridPoint::new(0, 0),
            GridPoint::new(4, 4),
            GridPoint::new(0, 4),
            GridPoint::new(4, 0),
        ));
    }

    #[test]
    fn test_segments_disjoint() {
        assert!(!segments_intersect(
            GridPoint::new(0, 0),
            GridPoint::new(1, 1),
            GridPoint::new(3, 3),
            GridPoint::new(4, 2),
        ));
    }

    #[test]
    fn test_segments_collinear_overlap_is_false() {
        assert!(!segments_intersect(
            GridPoint::new(0, 0),
            GridPoint::new(4, 0),
            GridPoint::new(2, 0),
            GridPoint::new(6, 0),
        ));
    }
}
