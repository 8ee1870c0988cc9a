//! Arcs between two geographic points, as sphere positions
//!
//! Two deliberately different strategies are kept side by side:
//! [`line_arc`] blends latitude and longitude linearly (cheap, fine for short
//! hops, not a geodesic) while [`great_circle_arc`] follows the true great
//! circle through an injected [`GreatCircleGenerator`].

pub mod generator;
pub mod geometry;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::projection::sphere::position_from_lat_lon;
use crate::projection::{GeoPoint, SpherePosition};

pub use generator::{GreatCircleGenerator, SlerpGenerator};
pub use geometry::{GeneratorOptions, PathGeometry, PointGeometry};

/// Default number of segments in an arc
pub const DEFAULT_SEGMENTS: usize = 32;

/// Default sphere radius
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Arc sampling settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcOptions {
    #[serde(default = "default_segments")]
    pub segments: usize,
    #[serde(default = "default_radius")]
    pub radius: f64,
}

fn default_segments() -> usize {
    DEFAULT_SEGMENTS
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl ArcOptions {
    /// Parses options from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Failed to parse arc options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that the radius is a positive finite number
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::Config(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Interpolates latitude/longitude linearly and places each sample on the sphere
///
/// Returns `segments + 1` positions. When the endpoints are more than 180
/// degrees apart in longitude, the smaller longitude is shifted by 360 so the
/// arc takes the short way across the antimeridian. With zero segments only
/// the start position is returned.
pub fn line_arc(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    segments: usize,
    radius: f64,
) -> Vec<SpherePosition> {
    let (lon1, lon2) = shortest_longitudes(lon1, lon2);

    if segments == 0 {
        return vec![position_from_lat_lon(lat1, lon1, radius)];
    }

    let positions: Vec<SpherePosition> = (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let lat = lat1 + (lat2 - lat1) * t;
            let lon = lon1 + (lon2 - lon1) * t;
            trace!(i, lat, lon, "line arc sample");
            position_from_lat_lon(lat, lon, radius)
        })
        .collect();

    debug!(segments, lon1, lon2, "built line arc");
    positions
}

/// [`line_arc`] over typed endpoints and options
pub fn line_arc_with(start: GeoPoint, end: GeoPoint, options: &ArcOptions) -> Vec<SpherePosition> {
    line_arc(start.lat, start.lon, end.lat, end.lon, options.segments, options.radius)
}

/// Shifts the smaller longitude by 360 when the raw difference exceeds 180
fn shortest_longitudes(lon1: f64, lon2: f64) -> (f64, f64) {
    if (lon2 - lon1).abs() > 180.0 {
        if lon1 < lon2 {
            (lon1 + 360.0, lon2)
        } else {
            (lon1, lon2 + 360.0)
        }
    } else {
        (lon1, lon2)
    }
}

/// Follows the great circle between two points on the unit sphere
///
/// The generator's sub-paths are flattened in order. A generator failure or
/// an empty geometry is returned as an error and no positions are produced.
pub fn great_circle_arc<G>(
    generator: &G,
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    npoints: usize,
) -> Result<Vec<SpherePosition>>
where
    G: GreatCircleGenerator + ?Sized,
{
    let start = PointGeometry::new(lon1, lat1);
    let end = PointGeometry::new(lon2, lat2);
    let options = GeneratorOptions { npoints };

    let geometry = generator.generate(&start, &end, &options).map_err(|e| match e {
        Error::Generation(_) | Error::EmptyGeometry => e,
        other => Error::Generation(other.to_string()),
    })?;

    if geometry.is_empty() {
        return Err(Error::EmptyGeometry);
    }

    let parts = geometry.part_count();
    let positions: Vec<SpherePosition> = geometry
        .into_coordinates()
        .into_iter()
        .map(|[lon, lat]| {
            trace!(lat, lon, "great-circle sample");
            position_from_lat_lon(lat, lon, DEFAULT_RADIUS)
        })
        .collect();

    debug!(npoints, parts, points = positions.len(), "built great-circle arc");
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn assert_position_close(a: SpherePosition, b: SpherePosition) {
        assert_close(a.x, b.x, 1e-9);
        assert_close(a.y, b.y, 1e-9);
        assert_close(a.z, b.z, 1e-9);
    }

    #[test]
    fn test_line_arc_length_and_endpoints() {
        let arc = line_arc(10.0, 20.0, -30.0, 60.0, 8, 2.5);

        assert_eq!(arc.len(), 9);
        assert_position_close(arc[0], position_from_lat_lon(10.0, 20.0, 2.5));
        assert_position_close(arc[8], position_from_lat_lon(-30.0, 60.0, 2.5));
        for position in &arc {
            assert_close(position.length(), 2.5, 1e-9);
        }
    }

    #[test]
    fn test_line_arc_crosses_antimeridian_short_way() {
        let arc = line_arc(0.0, 170.0, 0.0, -170.0, 2, 1.0);

        assert_eq!(arc.len(), 3);
        assert_position_close(arc[1], position_from_lat_lon(0.0, 180.0, 1.0));
        assert_position_close(arc[2], position_from_lat_lon(0.0, -170.0, 1.0));
        // The prime meridian would sit on +X
        assert!(arc[1].x < -0.99);
    }

    #[test]
    fn test_shortest_longitudes() {
        assert_eq!(shortest_longitudes(170.0, -170.0), (170.0, 190.0));
        assert_eq!(shortest_longitudes(-170.0, 170.0), (190.0, 170.0));
        assert_eq!(shortest_longitudes(-10.0, 10.0), (-10.0, 10.0));
        assert_eq!(shortest_longitudes(0.0, 180.0), (0.0, 180.0));
    }

    #[test]
    fn test_line_arc_zero_segments() {
        let arc = line_arc(1.0, 2.0, 3.0, 4.0, 0, 1.0);
        assert_eq!(arc, vec![position_from_lat_lon(1.0, 2.0, 1.0)]);
    }

    #[test]
    fn test_line_arc_nan_endpoint_keeps_length() {
        let arc = line_arc(f64::NAN, 10.0, 20.0, 30.0, 4, 1.0);

        assert_eq!(arc.len(), 5);
        assert!(arc.iter().all(|p| p.x.is_nan() && p.y.is_nan() && p.z.is_nan()));
    }

    #[test]
    fn test_line_arc_with_defaults() {
        let arc = line_arc_with(
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(10.0, 10.0),
            &ArcOptions::default(),
        );
        assert_eq!(arc.len(), DEFAULT_SEGMENTS + 1);
    }

    #[test]
    fn test_arc_options_from_json() {
        let options = ArcOptions::from_json(r#"{"segments": 64}"#).unwrap();
        assert_eq!(options, ArcOptions { segments: 64, radius: 1.0 });

        assert_eq!(ArcOptions::from_json("{}").unwrap(), ArcOptions::default());
        assert!(matches!(ArcOptions::from_json(r#"{"radius": 0.0}"#), Err(Error::Config(_))));
        assert!(matches!(ArcOptions::from_json("[1, 2"), Err(Error::Config(_))));
    }

    #[test]
    fn test_great_circle_arc_flattens_parts() {
        fn fake(
            start: &PointGeometry,
            end: &PointGeometry,
            options: &GeneratorOptions,
        ) -> Result<PathGeometry> {
            assert_eq!(start.coordinates, [170.0, 10.0]);
            assert_eq!(end.coordinates, [-170.0, 20.0]);
            assert_eq!(options.npoints, 5);
            Ok(PathGeometry::MultiLineString {
                coordinates: vec![
                    vec![[170.0, 10.0], [180.0, 15.0]],
                    vec![[-180.0, 15.0], [-170.0, 20.0]],
                ],
            })
        }

        let arc = great_circle_arc(&fake, 10.0, 170.0, 20.0, -170.0, 5).unwrap();

        let samples = [[170.0, 10.0], [180.0, 15.0], [-180.0, 15.0], [-170.0, 20.0]];
        let expected: Vec<SpherePosition> = samples
            .iter()
            .map(|&[lon, lat]| position_from_lat_lon(lat, lon, 1.0))
            .collect();
        assert_eq!(arc, expected);
    }

    #[test]
    fn test_great_circle_arc_generator_failure() {
        fn failing(
            _: &PointGeometry,
            _: &PointGeometry,
            _: &GeneratorOptions,
        ) -> Result<PathGeometry> {
            Err(Error::Config("library unavailable".to_string()))
        }

        let err = great_circle_arc(&failing, 0.0, 0.0, 1.0, 1.0, 8).unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
    }

    #[test]
    fn test_great_circle_arc_empty_geometry() {
        fn empty(
            _: &PointGeometry,
            _: &PointGeometry,
            _: &GeneratorOptions,
        ) -> Result<PathGeometry> {
            Ok(PathGeometry::MultiLineString { coordinates: vec![vec![]] })
        }

        let err = great_circle_arc(&empty, 0.0, 0.0, 1.0, 1.0, 8).unwrap_err();
        assert!(matches!(err, Error::EmptyGeometry));
    }

    #[test]
    fn test_great_circle_arc_with_slerp() {
        let arc = great_circle_arc(&SlerpGenerator::new(), 0.0, 0.0, 0.0, 90.0, 10).unwrap();

        assert_eq!(arc.len(), 10);
        assert_position_close(arc[0], position_from_lat_lon(0.0, 0.0, 1.0));
        assert_position_close(arc[9], position_from_lat_lon(0.0, 90.0, 1.0));
        for position in &arc {
            assert_close(position.length(), 1.0, 1e-9);
            assert_close(position.y, 0.0, 1e-9);
        }
    }

    #[test]
    fn test_great_circle_arc_along_date_line_is_finite() {
        for npoints in [2, 3, 8] {
            let arc = great_circle_arc(&SlerpGenerator::new(), 10.0, 180.0, 20.0, -180.0, npoints)
                .unwrap();
            assert!(arc.len() >= npoints);
            for position in &arc {
                assert!(position.x.is_finite() && position.y.is_finite() && position.z.is_finite());
                assert_close(position.length(), 1.0, 1e-9);
            }
        }
    }

    #[test]
    fn test_great_circle_arc_dyn_generator() {
        let generator: Box<dyn GreatCircleGenerator> = Box::new(SlerpGenerator::new());
        let arc = great_circle_arc(generator.as_ref(), 45.0, -73.0, 48.0, 2.0, 4).unwrap();
        assert_eq!(arc.len(), 4);
    }
}
