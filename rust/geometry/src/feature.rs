// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feature building
//!
//! Dispatches on the geometry variant, drives arc resolution, coordinate
//! decoding, ring simplification and path assembly, then attaches decoded
//! properties. Every recovery point of the decode lives here: a bad arc
//! reference drops one path component, an unknown geometry kind yields an
//! empty feature.

use crate::arcs::resolve_arc;
use crate::assemble::{open_path, RingAssembler};
use crate::decode::{decode_arc, dequantize};
use crate::path::{Feature, Path};
use crate::simplify::simplify_ring_run;
use topo_lite_core::{ArcIndex, Geometry, Properties, Ring, Topology, Transcoder, Value};
use tracing::warn;

/// Build the feature for one geometry.
///
/// Never fails: malformed components degrade to missing paths and the
/// feature is returned with whatever was assembled successfully.
pub fn build_feature(
    topology: &Topology,
    geometry: &Geometry,
    id: u64,
    transcoder: &dyn Transcoder,
) -> Feature {
    let mut feature = Feature::new(id);
    let transform = topology.transform.as_ref();
    match geometry {
        Geometry::Point(pt) => {
            let mut path = Path::new();
            path.move_to(dequantize(pt.coord, transform));
            feature.paths.push(path);
        }
        Geometry::MultiPoint(multi_pt) => {
            for &coord in &multi_pt.points {
                let mut path = Path::new();
                path.move_to(dequantize(coord, transform));
                feature.paths.push(path);
            }
        }
        Geometry::LineString(line) => {
            if let Some(path) = line_path(topology, line.arc) {
                feature.paths.push(path);
            }
        }
        Geometry::MultiLineString(multi_line) => {
            // each reference is its own open path, never joined
            for &index in &multi_line.arcs {
                if let Some(path) = line_path(topology, index) {
                    feature.paths.push(path);
                }
            }
        }
        Geometry::Polygon(poly) => {
            append_ring_paths(topology, &poly.rings, &mut feature);
        }
        Geometry::MultiPolygon(multi_poly) => {
            for rings in &multi_poly.polygons {
                append_ring_paths(topology, rings, &mut feature);
            }
        }
        // deliberately permissive: unsupported kinds decode to nothing
        Geometry::Unknown => return feature,
    }
    assign_properties(&mut feature, geometry.props(), transcoder);
    feature
}

/// Resolve, decode and assemble one open line component.
fn line_path(topology: &Topology, index: ArcIndex) -> Option<Path> {
    match resolve_arc(index, topology.arcs.len()) {
        Ok((arc, reversed)) => {
            let coords = decode_arc(&topology.arcs[arc], topology.transform.as_ref());
            let path = open_path(&coords, reversed);
            (!path.is_empty()).then_some(path)
        }
        Err(error) => {
            warn!(%error, "skipping line component");
            None
        }
    }
}

/// Assemble every ring of a polygon into its own closed path.
fn append_ring_paths(topology: &Topology, rings: &[Ring], feature: &mut Feature) {
    for ring in rings {
        let mut assembler = RingAssembler::new();
        for &index in ring {
            match resolve_arc(index, topology.arcs.len()) {
                Ok((arc, reversed)) => {
                    let coords = decode_arc(&topology.arcs[arc], topology.transform.as_ref());
                    assembler.append_run(&simplify_ring_run(&coords), reversed);
                }
                Err(error) => warn!(%error, "skipping ring arc"),
            }
        }
        let path = assembler.finish();
        if !path.is_empty() {
            feature.paths.push(path);
        }
    }
}

/// Attach properties; string values pass through the transcoder, other
/// scalars are stored as-is. First occurrence of a key wins.
fn assign_properties(
    feature: &mut Feature,
    props: Option<&Properties>,
    transcoder: &dyn Transcoder,
) {
    if let Some(props) = props {
        for (key, value) in props {
            let value = match value {
                Value::String(s) => Value::String(transcoder.transcode(s)),
                other => other.clone(),
            };
            feature.put_new(key.clone(), value);
        }
    }
}
