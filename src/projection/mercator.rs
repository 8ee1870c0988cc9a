//! Spherical Web Mercator (EPSG:3857) forward projection

use std::f64::consts::FRAC_PI_4;

use rayon::prelude::*;

use crate::projection::coordinate::{GeoPoint, PlanarPosition};

/// WGS84 semi-major axis in meters, used as the Web Mercator sphere radius
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude limit in degrees where Web Mercator becomes square
pub const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// Projects a longitude in degrees to Web Mercator X in meters
///
/// Longitudes outside [-180, 180] are scaled as-is, which is what a
/// continuous path needs.
pub fn mercator_x(lon: f64) -> f64 {
    EARTH_RADIUS * lon.to_radians()
}

/// Projects a latitude in degrees to Web Mercator Y in meters
///
/// Latitudes beyond [`MAX_LATITUDE`] are clamped to it, since Y diverges
/// at the poles.
pub fn mercator_y(lat: f64) -> f64 {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    EARTH_RADIUS * (FRAC_PI_4 + lat / 2.0).tan().ln()
}

/// Projects a geographic point to a planar position
pub fn project(point: GeoPoint) -> PlanarPosition {
    PlanarPosition::new(mercator_x(point.lon), mercator_y(point.lat))
}

/// Projects a whole path in parallel, preserving order
pub fn project_path(points: &[GeoPoint]) -> Vec<PlanarPosition> {
    points.par_iter().map(|&point| project(point)).collect()
}
