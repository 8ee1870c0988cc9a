//! Coordinate types and the globe/plane projections

pub mod coordinate;
pub mod mercator;
pub mod sphere;

pub use coordinate::{GeoPoint, PlanarPosition, SpherePosition};
pub use mercator::{mercator_x, mercator_y, EARTH_RADIUS, MAX_LATITUDE};
pub use sphere::position_from_lat_lon;
