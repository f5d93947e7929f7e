// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Featureset cursor
//!
//! Pull-based iteration over a fixed array of geometry indices, one feature
//! per call. The cursor owns its position and feature-id counter, so any
//! number of cursors may iterate one shared topology concurrently.

use crate::error::{Error, Result};
use crate::feature::build_feature;
use crate::path::Feature;
use topo_lite_core::{Geometry, Topology, Transcoder};
use tracing::warn;

/// Sequential cursor producing one decoded feature per geometry index.
///
/// Feature ids start at 0 and increment for every consumed index, including
/// ones that degrade to empty features. Once the index array is consumed the
/// cursor is exhausted and yields `None` forever.
pub struct Featureset<'a> {
    topology: &'a Topology,
    transcoder: &'a dyn Transcoder,
    index_array: Vec<usize>,
    position: usize,
    feature_id: u64,
}

impl<'a> Featureset<'a> {
    /// Create a cursor over the given geometry indices.
    ///
    /// The index array is externally supplied and may subset or reorder the
    /// topology's geometries.
    pub fn new(
        topology: &'a Topology,
        transcoder: &'a dyn Transcoder,
        index_array: Vec<usize>,
    ) -> Self {
        Self {
            topology,
            transcoder,
            index_array,
            position: 0,
            feature_id: 0,
        }
    }

    /// Whether every index has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.index_array.len()
    }

    fn geometry_at(&self, index: usize) -> Result<&'a Geometry> {
        self.topology
            .geometries
            .get(index)
            .ok_or(Error::GeometryIndexOutOfRange {
                index,
                geometry_count: self.topology.geometries.len(),
            })
    }
}

impl Iterator for Featureset<'_> {
    type Item = Feature;

    fn next(&mut self) -> Option<Feature> {
        let index = *self.index_array.get(self.position)?;
        self.position += 1;
        let id = self.feature_id;
        self.feature_id += 1;
        match self.geometry_at(index) {
            Ok(geometry) => Some(build_feature(self.topology, geometry, id, self.transcoder)),
            Err(error) => {
                warn!(%error, "emitting empty feature");
                Some(Feature::new(id))
            }
        }
    }
}
