// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topo-Lite Feature Decoding
//!
//! Turns a `topo_lite_core::Topology` into discrete, attributed features.
//! Arc coordinate runs are delta-decoded and dequantized, signed arc
//! references are resolved into (arc, direction) pairs, polygon rings are
//! simplified and assembled into draw-command paths, and attribute values are
//! carried through unmodified (strings pass through a transcoder).
//!
//! The entry point is [`Featureset`], a pull-based cursor over a fixed array
//! of geometry indices:
//!
//! ```rust
//! use topo_lite_core::{Arc, Coordinate, Geometry, LineString, Topology, Utf8Transcoder};
//! use topo_lite_geometry::Featureset;
//!
//! let topology = Topology {
//!     arcs: vec![Arc::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)])],
//!     geometries: vec![Geometry::LineString(LineString { arc: 0, props: None })],
//!     transform: None,
//! };
//! let transcoder = Utf8Transcoder;
//! let mut features = Featureset::new(&topology, &transcoder, vec![0]);
//! let feature = features.next().unwrap();
//! assert_eq!(feature.id, 0);
//! assert_eq!(feature.paths.len(), 1);
//! assert!(features.next().is_none());
//! ```
//!
//! Malformed input degrades instead of failing: an out-of-range geometry
//! index or an unknown geometry kind yields an empty feature, and an
//! out-of-range arc reference skips just that path component.

pub mod arcs;
pub mod assemble;
pub mod decode;
pub mod error;
pub mod feature;
pub mod featureset;
pub mod path;
pub mod simplify;

pub use arcs::resolve_arc;
pub use decode::{decode_arc, dequantize};
pub use error::{Error, Result};
pub use feature::build_feature;
pub use featureset::Featureset;
pub use path::{Command, Feature, Path, PropertyMap};
pub use simplify::{simplify_ring_run, SIMPLIFY_TOLERANCE};
