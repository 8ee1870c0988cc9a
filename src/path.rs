//! Antimeridian-continuous paths
//!
//! Plotting a route that crosses ±180 longitude point by point produces a
//! line tearing across the whole map. Instead of normalizing each point,
//! the builder carries a running ±360 offset so longitudes keep moving in
//! the direction of travel.

use tracing::debug;

use crate::projection::mercator;
use crate::projection::{GeoPoint, PlanarPosition};

/// Rewrites `[lon, lat]` pairs so no step jumps across the antimeridian
///
/// Crossings are detected on the original longitudes: a step of more than
/// 180 degrees is taken as a wrap. The first point and every latitude pass
/// through unchanged, and the output has the input's length.
pub fn build_continuous_path(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let mut adjustment = 0.0;
    let mut crossings = 0usize;
    let mut previous_lon: Option<f64> = None;

    let path: Vec<[f64; 2]> = points
        .iter()
        .map(|&[lon, lat]| {
            if let Some(prev) = previous_lon {
                let diff = lon - prev;
                if diff.abs() > 180.0 {
                    adjustment += if diff > 0.0 { -360.0 } else { 360.0 };
                    crossings += 1;
                }
            }
            previous_lon = Some(lon);
            [lon + adjustment, lat]
        })
        .collect();

    if crossings > 0 {
        debug!(points = path.len(), crossings, "unwrapped path across antimeridian");
    }
    path
}

/// Builds a continuous path and projects it to Web Mercator
///
/// X keeps growing past the ±180 edge, so the projected line stays unbroken.
pub fn continuous_mercator_path(points: &[[f64; 2]]) -> Vec<PlanarPosition> {
    let path: Vec<GeoPoint> = build_continuous_path(points)
        .into_iter()
        .map(GeoPoint::from)
        .collect();
    mercator::project_path(&path)
}
