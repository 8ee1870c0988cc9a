//! Latitude/longitude to 3D globe positions
//!
//! Latitude 90 sits on the +Y pole. The azimuth is offset by 180 degrees and
//! x is negated, so longitude 0 on the equator lands on +X and longitude 90
//! on -Z. Globe textures and arcs must share this convention.

use rayon::prelude::*;

use crate::projection::coordinate::{GeoPoint, SpherePosition};

/// Converts latitude/longitude in degrees to a position on a sphere of `radius`
///
/// Latitude is not validated; values outside [-90, 90] wrap through the
/// trigonometry.
pub fn position_from_lat_lon(lat: f64, lon: f64, radius: f64) -> SpherePosition {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();

    SpherePosition::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Converts a geographic point to a sphere position
pub fn position_from_geo(point: GeoPoint, radius: f64) -> SpherePosition {
    position_from_lat_lon(point.lat, point.lon, radius)
}

/// Converts a whole path in parallel, preserving order
pub fn positions_from_path(points: &[GeoPoint], radius: f64) -> Vec<SpherePosition> {
    points
        .par_iter()
        .map(|&point| position_from_geo(point, radius))
        .collect()
}
