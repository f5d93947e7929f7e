// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology data model
//!
//! The structures an external decoder produces from the serialized format:
//! arcs, geometries and the optional quantization transform.

use crate::value::Properties;
use smallvec::SmallVec;

/// A raw coordinate pair.
///
/// When the owning [`Topology`] carries a [`Transform`], arc coordinates are
/// per-arc deltas in quantized space; otherwise they are absolute.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Affine dequantization transform.
///
/// Present on a topology iff arc coordinates are quantized and delta-encoded.
/// Absolute position = `running_sum * scale + translate`, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    /// Create a new transform
    #[inline]
    pub fn new(scale_x: f64, scale_y: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }
}

/// A reusable polyline fragment referenced by one or more geometries.
///
/// Immutable once built; owned by the [`Topology`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// Raw coordinate pairs (deltas when the topology has a transform)
    pub coordinates: Vec<Coordinate>,
}

impl Arc {
    /// Create an arc from raw coordinates
    #[inline]
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// Number of raw coordinates in this arc
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether this arc holds no coordinates
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Signed ring-reference index into a topology's arcs.
///
/// A negative value means the arc is traversed back-to-front:
/// `reversed = index < 0`, `resolved = -index - 1` when reversed.
pub type ArcIndex = i32;

/// One closed polygon boundary, as an ordered run of signed arc references.
pub type Ring = SmallVec<[ArcIndex; 4]>;

/// Point geometry: a single raw coordinate
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub coord: Coordinate,
    pub props: Option<Properties>,
}

/// MultiPoint geometry: raw coordinates, order preserved
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPoint {
    pub points: Vec<Coordinate>,
    pub props: Option<Properties>,
}

/// LineString geometry: a single signed arc reference
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString {
    pub arc: ArcIndex,
    pub props: Option<Properties>,
}

/// MultiLineString geometry: independent open paths, one per arc reference
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLineString {
    pub arcs: Vec<ArcIndex>,
    pub props: Option<Properties>,
}

/// Polygon geometry: an outer ring plus optional holes
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub rings: Vec<Ring>,
    pub props: Option<Properties>,
}

/// MultiPolygon geometry: polygons in order, each a list of rings
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon {
    pub polygons: Vec<Vec<Ring>>,
    pub props: Option<Properties>,
}

/// A tagged geometry variant.
///
/// `Unknown` models geometry kinds the external decoder could not classify;
/// downstream decoding turns those into empty features rather than failing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    Unknown,
}

impl Geometry {
    /// Properties attached to this geometry, if any
    pub fn props(&self) -> Option<&Properties> {
        match self {
            Geometry::Point(g) => g.props.as_ref(),
            Geometry::MultiPoint(g) => g.props.as_ref(),
            Geometry::LineString(g) => g.props.as_ref(),
            Geometry::MultiLineString(g) => g.props.as_ref(),
            Geometry::Polygon(g) => g.props.as_ref(),
            Geometry::MultiPolygon(g) => g.props.as_ref(),
            Geometry::Unknown => None,
        }
    }
}

/// A decoded topology: shared arcs, the geometries referencing them and the
/// optional dequantization transform.
///
/// Read-only for the lifetime of any featureset iterating it; immutable
/// sharing across threads is safe since nothing here is interior-mutable.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topology {
    /// Shared arcs, addressed by stable index
    pub arcs: Vec<Arc>,
    /// Geometries in the order the external decoder produced them
    pub geometries: Vec<Geometry>,
    /// Present iff arc coordinates are quantized/delta-encoded
    pub transform: Option<Transform>,
}

impl Topology {
    /// Create a topology from its parts
    pub fn new(arcs: Vec<Arc>, geometries: Vec<Geometry>, transform: Option<Transform>) -> Self {
        Self {
            arcs,
            geometries,
            transform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_len() {
        let arc = Arc::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 2.0)]);
        assert_eq!(arc.len(), 2);
        assert!(!arc.is_empty());
        assert!(Arc::default().is_empty());
    }

    #[test]
    fn test_geometry_props() {
        let props = vec![("name".to_string(), crate::Value::from("A"))];
        let geom = Geometry::Point(Point {
            coord: Coordinate::new(1.0, 2.0),
            props: Some(props.clone()),
        });
        assert_eq!(geom.props(), Some(&props));
        assert_eq!(Geometry::Unknown.props(), None);
    }

    #[test]
    fn test_ring_inline_capacity() {
        let ring: Ring = Ring::from_slice(&[0, -2, 3]);
        assert_eq!(ring.len(), 3);
        assert!(!ring.spilled());
    }
}
