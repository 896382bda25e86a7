use flightview_core::{FlightPath, GridPoint, PathColor, PathStore, StoreError};

/// The hardcoded demonstration set: three 3-point paths sharing a starting
/// point, in red, green, and blue.
pub fn demo_store() -> Result<PathStore, StoreError> {
    let paths = vec![
        FlightPath::new(vec![
            GridPoint::new(1, 1),
            GridPoint::new(2, 2),
            GridPoint::new(3, 3),
        ]),
        FlightPath::new(vec![
            GridPoint::new(1, 1),
            GridPoint::new(2, 4),
            GridPoint::new(3, 2),
        ]),
        FlightPath::new(vec![
            GridPoint::new(1, 1),
            GridPoint::new(4, 2),
            GridPoint::new(3, 4),
        ]),
    ];
    let colors = vec![PathColor::RED, PathColor::GREEN, PathColor::BLUE];

    PathStore::new("demo flights", paths, colors)
}
