//! Text formatting for building listings and walking directions.

use std::collections::BTreeMap;
use std::fmt::Write;

use campuspaths_lib::{Coordinate, Direction, Path};

/// Render one `SHORT: Long Name` line per building, sorted by short name.
pub fn render_buildings(names: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (short, long) in names {
        let _ = writeln!(out, "{short}: {long}");
    }
    out
}

/// Render step-by-step walking directions between two named buildings.
///
/// Distances are rounded to whole feet and coordinates to whole units.
pub fn render_directions(from: &str, to: &str, path: &Path<Coordinate, f64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Path from {from} to {to}:");
    for segment in path {
        let direction = Direction::of(segment.start(), segment.end());
        let _ = writeln!(
            out,
            "\tWalk {:.0} feet {} to {}",
            segment.cost(),
            direction,
            segment.end()
        );
    }
    let _ = writeln!(out, "Total distance: {:.0} feet", path.cost());
    out
}
