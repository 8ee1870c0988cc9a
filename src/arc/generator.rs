//! Great-circle path generation
//!
//! Arcs only depend on the [`GreatCircleGenerator`] capability, so callers
//! can plug in a geodesy library or a deterministic fake. [`SlerpGenerator`]
//! is the built-in spherical implementation.

use tracing::debug;

use crate::arc::geometry::{GeneratorOptions, PathGeometry, PointGeometry};
use crate::error::{Error, Result};
use crate::projection::GeoPoint;

/// Produces an ordered path along the great circle between two points
pub trait GreatCircleGenerator: Send + Sync {
    /// Generates about `options.npoints` `[lon, lat]` coordinates from `start` to `end`
    ///
    /// The path may be split into several parts, for example at the
    /// antimeridian; parts are read in order. Return [`Error::Generation`] when
    /// no path can be produced. A geometry without coordinates is treated by
    /// [`great_circle_arc`](crate::arc::great_circle_arc) as
    /// [`Error::EmptyGeometry`], and in both cases the arc draws nothing.
    fn generate(
        &self,
        start: &PointGeometry,
        end: &PointGeometry,
        options: &GeneratorOptions,
    ) -> Result<PathGeometry>;
}

impl<F> GreatCircleGenerator for F
where
    F: Fn(&PointGeometry, &PointGeometry, &GeneratorOptions) -> Result<PathGeometry> + Send + Sync,
{
    fn generate(
        &self,
        start: &PointGeometry,
        end: &PointGeometry,
        options: &GeneratorOptions,
    ) -> Result<PathGeometry> {
        self(start, end, options)
    }
}

const ANGLE_EPSILON: f64 = 1e-12;

/// Spherical linear interpolation between two points on the unit sphere
///
/// Emits exactly `npoints` coordinates including both endpoints (at least
/// two). The path is split into a `MultiLineString` where it crosses the
/// antimeridian, with both parts meeting at the interpolated crossing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlerpGenerator;

impl SlerpGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl GreatCircleGenerator for SlerpGenerator {
    fn generate(
        &self,
        start: &PointGeometry,
        end: &PointGeometry,
        options: &GeneratorOptions,
    ) -> Result<PathGeometry> {
        let start = GeoPoint::from(start.coordinates).normalized();
        let end = GeoPoint::from(end.coordinates).normalized();
        let a = to_unit_vector(start);
        let b = to_unit_vector(end);

        let cross = [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ];
        let sin_d = (cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]).sqrt();
        let cos_d = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
        let d = sin_d.atan2(cos_d);

        if !d.is_finite() {
            return Err(Error::Generation("non-finite endpoint coordinates".to_string()));
        }
        if d < ANGLE_EPSILON {
            return Err(Error::Generation(format!(
                "start and end points coincide at [{}, {}]",
                start.lon, start.lat
            )));
        }
        if std::f64::consts::PI - d < ANGLE_EPSILON {
            return Err(Error::Generation(
                "antipodal points do not define a unique great circle".to_string(),
            ));
        }

        let npoints = options.npoints.max(2);
        let last = npoints - 1;
        let sin_total = d.sin();

        let coordinates: Vec<[f64; 2]> = (0..npoints)
            .map(|i| {
                if i == 0 {
                    return start.to_array();
                }
                if i == last {
                    return end.to_array();
                }
                let f = i as f64 / last as f64;
                let wa = ((1.0 - f) * d).sin() / sin_total;
                let wb = (f * d).sin() / sin_total;
                from_unit_vector([
                    wa * a[0] + wb * b[0],
                    wa * a[1] + wb * b[1],
                    wa * a[2] + wb * b[2],
                ])
            })
            .collect();

        let parts = split_at_antimeridian(coordinates);
        debug!(npoints, parts = parts.len(), "generated great-circle path");

        Ok(PathGeometry::from_parts(parts))
    }
}

fn to_unit_vector(point: GeoPoint) -> [f64; 3] {
    let lat = point.lat.to_radians();
    let lon = point.lon.to_radians();
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

fn from_unit_vector(v: [f64; 3]) -> [f64; 2] {
    let lat = v[2].atan2((v[0] * v[0] + v[1] * v[1]).sqrt());
    let lon = v[1].atan2(v[0]);
    [lon.to_degrees(), lat.to_degrees()]
}

/// Splits a `[lon, lat]` sequence wherever a step jumps more than 180 degrees
fn split_at_antimeridian(coordinates: Vec<[f64; 2]>) -> Vec<Vec<[f64; 2]>> {
    let mut parts = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::with_capacity(coordinates.len());

    for point in coordinates {
        if let Some(&[prev_lon, prev_lat]) = current.last() {
            let [lon, lat] = point;
            if (lon - prev_lon).abs() > 180.0 {
                let unwrapped = if lon < prev_lon { lon + 360.0 } else { lon - 360.0 };
                let boundary = if prev_lon >= 0.0 { 180.0 } else { -180.0 };
                let t = (boundary - prev_lon) / (unwrapped - prev_lon);
                // A step between 180 and -180 has no width to interpolate over
                let crossing_lat = if t.is_finite() {
                    prev_lat + t * (lat - prev_lat)
                } else {
                    prev_lat
                };

                if prev_lon != boundary {
                    current.push([boundary, crossing_lat]);
                }
                parts.push(std::mem::take(&mut current));
                if lon != -boundary {
                    current.push([-boundary, crossing_lat]);
                }
            }
        }
        current.push(point);
    }

    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
