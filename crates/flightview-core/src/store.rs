use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::color::PathColor;
use crate::path::FlightPath;

/// Grid-unit translation applied to every point when a store is built.
///
/// This is a fixed visual-separation step: paths that share a starting point
/// are shifted away from the origin together. It inspects nothing and
/// resolves no crossings.
pub const SEPARATION_OFFSET: (i32, i32) = (2, 2);

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("path count {paths} does not match color count {colors}")]
    ColorCountMismatch { paths: usize, colors: usize },
}

/// The immutable set of flight paths on display, each paired with a color.
///
/// Paths and colors are parallel vectors; index i of both refers to the same
/// logical path. The separation offset is applied exactly once, at
/// construction, to freshly built point data; the caller's input is never
/// aliased. There is no mutation API after construction.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathStore {
    /// Store identifier.
    pub id: Uuid,
    /// Display name for the path set.
    pub name: String,
    paths: Vec<FlightPath>,
    colors: Vec<PathColor>,
}

impl PathStore {
    pub fn new(
        name: &str,
        paths: Vec<FlightPath>,
        colors: Vec<PathColor>,
    ) -> Result<Self, StoreError> {
        if paths.len() != colors.len() {
            return Err(StoreError::ColorCountMismatch {
                paths: paths.len(),
                colors: colors.len(),
            });
        }

        let (dx, dy) = SEPARATION_OFFSET;
        let paths: Vec<FlightPath> = paths.into_iter().map(|p| p.translate(dx, dy)).collect();

        log::info!("path store '{}': {} paths", name, paths.len());

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            paths,
            colors,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn paths(&self) -> &[FlightPath] {
        &self.paths
    }

    pub fn colors(&self) -> &[PathColor] {
        &self.colors
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths zipped with their colors, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&FlightPath, PathColor)> + '_ {
        self.paths.iter().zip(self.colors.iter().copied())
    }

    /// Maximum x-coordinate over all stored points, or 0 when there are none.
    pub fn max_x(&self) -> i32 {
        self.paths.iter().filter_map(|p| p.max_x()).max().unwrap_or(0)
    }

    /// Maximum y-coordinate over all stored points, or 0 when there are none.
    pub fn max_y(&self) -> i32 {
        self.paths.iter().filter_map(|p| p.max_y()).max().unwrap_or(0)
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridPoint;

    fn path(points: &[(i32, i32)]) -> FlightPath {
        FlightPath::new(points.iter().map(|&(x, y)| GridPoint::new(x, y)).collect())
    }

    #[test]
    fn test_offset_applied_once_at_construction() {
        let store = PathStore::new(
            "test",
            vec![path(&[(1, 1), (2, 2)])],
            vec![PathColor::RED],
        )
        .unwrap();

        let expected = [GridPoint::new(3, 3), GridPoint::new(4, 4)];
        assert_eq!(store.paths()[0].points(), &expected);
        // Re-reading must not drift the points.
        assert_eq!(store.paths()[0].points(), &expected);
    }

    #[test]
    fn test_max_coordinates_over_offset_points() {
        let store = PathStore::new(
            "test",
            vec![path(&[(1, 1), (2, 4)]), path(&[(4, 2), (3, 3)])],
            vec![PathColor::RED, PathColor::GREEN],
        )
        .unwrap();
        // Stored maxima include the (+2, +2) offset.
        assert_eq!(store.max_x(), 6);
        assert_eq!(store.max_y(), 6);
    }

    #[test]
    fn test_empty_store_maxima_are_zero() {
        let store = PathStore::new("empty", vec![], vec![]).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.max_x(), 0);
        assert_eq!(store.max_y(), 0);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let result = PathStore::new(
            "bad",
            vec![path(&[(1, 1)]), path(&[(2, 2)])],
            vec![PathColor::RED],
        );
        match result {
            Err(StoreError::ColorCountMismatch { paths, colors }) => {
                assert_eq!(paths, 2);
                assert_eq!(colors, 1);
            }
            Ok(_) => panic!("mismatched lengths must be rejected"),
        }
    }

    #[test]
    fn test_iter_pairs_paths_with_colors() {
        let store = PathStore::new(
            "test",
            vec![path(&[(1, 1)]), path(&[(2, 2)])],
            vec![PathColor::RED, PathColor::BLUE],
        )
        .unwrap();
        let colors: Vec<PathColor> = store.iter().map(|(_, c)| c).collect();
        assert_eq!(colors, vec![PathColor::RED, PathColor::BLUE]);
    }

    #[test]
    fn test_json_roundtrip() {
        let store = PathStore::new(
            "roundtrip",
            vec![path(&[(1, 1), (2, 4), (3, 2)])],
            vec![PathColor::GREEN],
        )
        .unwrap();

        let json = store.to_json().unwrap();
        let restored = PathStore::from_json(&json).unwrap();
        assert_eq!(restored.id, store.id);
        assert_eq!(restored.name, "roundtrip");
        assert_eq!(restored.paths(), store.paths());
        assert_eq!(restored.colors(), store.colors());
    }
}
