//! Geometry shapes exchanged with a great-circle generator
//!
//! These serialize to the GeoJSON forms geodesy libraries expect:
//! `{"type":"Point","coordinates":[lon,lat]}` in, a `LineString` or
//! `MultiLineString` out.

use serde::{Deserialize, Serialize};

use crate::projection::GeoPoint;

/// A point geometry in `[lon, lat]` order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { coordinates: [lon, lat] }
    }
}

impl From<GeoPoint> for PointGeometry {
    fn from(point: GeoPoint) -> Self {
        Self { coordinates: point.to_array() }
    }
}

/// Options passed to the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Number of points requested along the arc
    pub npoints: usize,
}

/// Path returned by a generator, possibly split into several parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PathGeometry {
    LineString { coordinates: Vec<[f64; 2]> },
    MultiLineString { coordinates: Vec<Vec<[f64; 2]>> },
}

impl PathGeometry {
    /// Builds a `LineString` for one part, a `MultiLineString` otherwise
    pub fn from_parts(mut parts: Vec<Vec<[f64; 2]>>) -> Self {
        if parts.len() == 1 {
            PathGeometry::LineString { coordinates: parts.remove(0) }
        } else {
            PathGeometry::MultiLineString { coordinates: parts }
        }
    }

    /// Number of sub-paths
    pub fn part_count(&self) -> usize {
        match self {
            PathGeometry::LineString { .. } => 1,
            PathGeometry::MultiLineString { coordinates } => coordinates.len(),
        }
    }

    /// True when no part carries any coordinate
    pub fn is_empty(&self) -> bool {
        match self {
            PathGeometry::LineString { coordinates } => coordinates.is_empty(),
            PathGeometry::MultiLineString { coordinates } => coordinates.iter().all(Vec::is_empty),
        }
    }

    /// Flattens all parts into one ordered coordinate sequence
    pub fn into_coordinates(self) -> Vec<[f64; 2]> {
        match self {
            PathGeometry::LineString { coordinates } => coordinates,
            PathGeometry::MultiLineString { coordinates } => {
                coordinates.into_iter().flatten().collect()
            }
        }
    }
}
