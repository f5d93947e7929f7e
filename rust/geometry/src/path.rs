// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Path and feature output model
//!
//! Decoded geometries are sequences of draw commands; a feature bundles its
//! paths with an ordered property map and a per-featureset id.

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use topo_lite_core::{Coordinate, Value};

/// A single draw command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    MoveTo(Coordinate),
    LineTo(Coordinate),
    Close,
}

/// One geometry path: an ordered run of draw commands.
///
/// Open paths carry no `Close`; polygon rings end with exactly one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<Command>,
}

impl Path {
    /// Create an empty path
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sub-path at `coord`
    #[inline]
    pub fn move_to(&mut self, coord: Coordinate) {
        self.commands.push(Command::MoveTo(coord));
    }

    /// Draw to `coord`
    #[inline]
    pub fn line_to(&mut self, coord: Coordinate) {
        self.commands.push(Command::LineTo(coord));
    }

    /// Close the current ring
    #[inline]
    pub fn close_path(&mut self) {
        self.commands.push(Command::Close);
    }

    /// Number of commands in this path
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether this path holds no commands
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of vertices (move-to and line-to commands)
    pub fn vertex_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| !matches!(c, Command::Close))
            .count()
    }
}

/// Feature property map: unique keys, insertion order preserved.
pub type PropertyMap = IndexMap<String, Value, BuildHasherDefault<FxHasher>>;

/// A decoded feature: its paths plus attached properties.
///
/// Ids are assigned per featureset, starting at 0 and incrementing for every
/// consumed geometry index, empty features included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    pub id: u64,
    pub paths: Vec<Path>,
    pub properties: PropertyMap,
}

impl Feature {
    /// Create an empty feature with the given id
    pub fn new(id: u64) -> Self {
        Self {
            id,
            paths: Vec::new(),
            properties: PropertyMap::default(),
        }
    }

    /// Insert a property, keeping the first occurrence of a duplicate key.
    pub fn put_new(&mut self, key: String, value: Value) {
        self.properties.entry(key).or_insert(value);
    }

    /// Whether this feature has neither paths nor properties
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_commands() {
        let mut path = Path::new();
        path.move_to(Coordinate::new(0.0, 0.0));
        path.line_to(Coordinate::new(1.0, 0.0));
        path.close_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path.vertex_count(), 2);
        assert_eq!(path.commands[2], Command::Close);
    }

    #[test]
    fn test_put_new_keeps_first() {
        let mut feature = Feature::new(0);
        feature.put_new("name".to_string(), Value::from("A"));
        feature.put_new("rank".to_string(), Value::from(1i64));
        feature.put_new("name".to_string(), Value::from("B"));
        assert_eq!(feature.properties.len(), 2);
        assert_eq!(feature.properties["name"], Value::from("A"));
        // insertion order preserved
        let keys: Vec<&str> = feature.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "rank"]);
    }

    #[test]
    fn test_empty_feature() {
        let feature = Feature::new(3);
        assert!(feature.is_empty());
        assert_eq!(feature.id, 3);
    }
}
