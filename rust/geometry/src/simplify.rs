// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon ring simplification
//!
//! Ramer-Douglas-Peucker point elimination via [`geo::Simplify`], applied to
//! each per-arc coordinate run of a polygon ring before it is assembled.
//! Open line geometries are deliberately never simplified, and the tolerance
//! is a fixed constant regardless of map scale; both are carried decisions
//! from the upstream format handling.

use geo::{Coord, LineString, Simplify};
use topo_lite_core::Coordinate;

/// Fixed perpendicular-distance tolerance for ring simplification.
pub const SIMPLIFY_TOLERANCE: f64 = 0.5;

/// Simplify one decoded ring run, preserving its first and last points.
///
/// Runs shorter than three points have nothing to eliminate and are returned
/// unchanged.
pub fn simplify_ring_run(coords: &[Coordinate]) -> Vec<Coordinate> {
    if coords.len() < 3 {
        return coords.to_vec();
    }
    let line = LineString::new(coords.iter().map(|c| Coord { x: c.x, y: c.y }).collect());
    line.simplify(&SIMPLIFY_TOLERANCE)
        .0
        .into_iter()
        .map(|c| Coordinate::new(c.x, c.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_preserves_endpoints() {
        let run = vec![
            c(0.0, 0.0),
            c(5.0, 0.1),
            c(10.0, -0.1),
            c(15.0, 8.0),
            c(20.0, 0.0),
        ];
        let simplified = simplify_ring_run(&run);
        assert_eq!(simplified.first(), run.first());
        assert_eq!(simplified.last(), run.last());
        assert!(simplified.len() <= run.len());
    }

    #[test]
    fn test_drops_points_within_tolerance() {
        // collinear midpoint deviates by zero and must go
        let run = vec![c(0.0, 0.0), c(1.0, 0.0), c(2.0, 0.0)];
        assert_eq!(simplify_ring_run(&run), vec![c(0.0, 0.0), c(2.0, 0.0)]);
    }

    #[test]
    fn test_keeps_points_beyond_tolerance() {
        let run = vec![c(0.0, 0.0), c(1.0, 1.0), c(2.0, 0.0)];
        assert_eq!(simplify_ring_run(&run), run);
    }

    #[test]
    fn test_short_runs_unchanged() {
        let run = vec![c(0.0, 0.0), c(1.0, 0.0)];
        assert_eq!(simplify_ring_run(&run), run);
        assert!(simplify_ring_run(&[]).is_empty());
    }
}
