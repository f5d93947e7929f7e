// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinate decoding
//!
//! Converts one arc's raw coordinate run into absolute space. With a
//! transform present the raw values are successive deltas in quantized space;
//! the running sum resets at the start of every arc, even when arcs are
//! consumed back-to-back while assembling one ring.

use topo_lite_core::{Arc, Coordinate, Transform};

/// Dequantize a single absolute coordinate (no delta accumulation).
///
/// Used for Point/MultiPoint coordinates, which are stored absolute in
/// quantized space.
#[inline]
pub fn dequantize(coord: Coordinate, transform: Option<&Transform>) -> Coordinate {
    match transform {
        Some(tr) => Coordinate::new(
            coord.x * tr.scale_x + tr.translate_x,
            coord.y * tr.scale_y + tr.translate_y,
        ),
        None => coord,
    }
}

/// Decode one arc into absolute-space coordinates.
///
/// Output length always equals the arc length. Without a transform the raw
/// coordinates are already absolute and pass through unchanged.
pub fn decode_arc(arc: &Arc, transform: Option<&Transform>) -> Vec<Coordinate> {
    match transform {
        None => arc.coordinates.clone(),
        Some(tr) => {
            let mut px = 0.0;
            let mut py = 0.0;
            arc.coordinates
                .iter()
                .map(|delta| {
                    px += delta.x;
                    py += delta.y;
                    Coordinate::new(px * tr.scale_x + tr.translate_x, py * tr.scale_y + tr.translate_y)
                })
                .collect()
        }
    }
}
