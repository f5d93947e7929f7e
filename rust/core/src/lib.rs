// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Topo-Lite Core
//!
//! In-memory data model for topology-encoded vector geometry (TopoJSON-style).
//!
//! A [`Topology`] stores geometry boundaries cut into shared, reusable arcs.
//! Each [`Arc`] holds a raw coordinate sequence that is delta-encoded and
//! quantized whenever a [`Transform`] is present on the topology. Geometries
//! reference arcs by signed index: a negative index means the arc is traversed
//! back-to-front.
//!
//! This crate defines only the model an external decoder produces. Decoding
//! topologies into drawable features lives in `topo-lite-geometry`.
//!
//! ## Quick Start
//!
//! ```rust
//! use topo_lite_core::{Arc, Coordinate, Geometry, LineString, Topology, Transform};
//!
//! let topology = Topology {
//!     arcs: vec![Arc::new(vec![
//!         Coordinate::new(0.0, 0.0),
//!         Coordinate::new(1.0, 0.0),
//!     ])],
//!     geometries: vec![Geometry::LineString(LineString { arc: 0, props: None })],
//!     transform: Some(Transform::new(1.0, 1.0, 0.0, 0.0)),
//! };
//! assert_eq!(topology.arcs[0].len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for the model types

pub mod topology;
pub mod transcode;
pub mod value;

pub use topology::{
    Arc, ArcIndex, Coordinate, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, Ring, Topology, Transform,
};
pub use transcode::{Transcoder, Utf8Transcoder};
pub use value::{Properties, Value};
