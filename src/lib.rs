//! globe-paths - Geographic coordinate transforms for globes and web maps
//!
//! globe-paths places latitude/longitude data on a 3D globe and on a flat
//! Web Mercator plane, and keeps lines visually continuous across the
//! antimeridian and along great-circle arcs. Every transform is a pure
//! function, safe to call from any number of threads.
//!
//! # Examples
//!
//! ## Globe Positions and Arcs
//!
//! ```
//! use globe_paths::{line_arc, great_circle_arc, position_from_lat_lon, SlerpGenerator};
//!
//! let north_pole = position_from_lat_lon(90.0, 0.0, 1.0);
//! assert!((north_pole.y - 1.0).abs() < 1e-12);
//!
//! // 32 segments, 33 positions, crossing the date line the short way
//! let arc = line_arc(0.0, 170.0, 0.0, -170.0, 32, 1.0);
//! assert_eq!(arc.len(), 33);
//!
//! // A failed great circle draws nothing
//! let arc = great_circle_arc(&SlerpGenerator::new(), 45.5, -73.6, 48.9, 2.4, 64)
//!     .unwrap_or_default();
//! assert_eq!(arc.len(), 64);
//! ```
//!
//! ## Flat Maps
//!
//! ```
//! use globe_paths::{build_continuous_path, mercator_x, mercator_y};
//!
//! let path = build_continuous_path(&[[170.0, 0.0], [-170.0, 0.0], [-160.0, 0.0]]);
//! assert_eq!(path, vec![[170.0, 0.0], [190.0, 0.0], [200.0, 0.0]]);
//!
//! let x = mercator_x(path[1][0]);
//! let y = mercator_y(90.0); // clamped, stays finite
//! assert!(x > mercator_x(180.0) && y.is_finite());
//! ```

pub mod arc;
pub mod error;
pub mod path;
pub mod projection;

pub use arc::{
    great_circle_arc, line_arc, line_arc_with, ArcOptions, GeneratorOptions, GreatCircleGenerator,
    PathGeometry, PointGeometry, SlerpGenerator,
};
pub use error::{Error, Result};
pub use path::{build_continuous_path, continuous_mercator_path};
pub use projection::{
    mercator_x, mercator_y, position_from_lat_lon, GeoPoint, PlanarPosition, SpherePosition,
};
