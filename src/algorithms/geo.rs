//! Great circle geometry primitives.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/geo_test.rs"]
mod geo_test;

use crate::models::common::{Coordinate, Distance};
use crate::utils::Float;

/// Mean Earth radius in kilometers. The constant is fixed across the whole system so that
/// distance computations stay reproducible.
pub const EARTH_RADIUS_KM: Float = 6371.;

/// Kilometers covered by one degree of latitude. Used to convert a radius threshold given
/// in kilometers into the angular unit required by density clustering.
pub const KM_PER_DEGREE: Float = 111.;

/// Computes the great circle distance between two coordinates in kilometers using the
/// haversine formula.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> Distance {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.).sin().powi(2) + lat_a.cos() * lat_b.cos() * (delta_lng / 2.).sin().powi(2);

    2. * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Converts a distance in kilometers to decimal degrees.
pub fn to_angular(km: Float) -> Float {
    km / KM_PER_DEGREE
}

/// Computes the planar distance between two coordinates in degree space. A cheap
/// approximation valid at delivery area scale, used only where the radius threshold is
/// given in angular units.
pub fn angular_distance(a: &Coordinate, b: &Coordinate) -> Float {
    let delta_lat = a.lat - b.lat;
    let delta_lng = a.lng - b.lng;

    (delta_lat * delta_lat + delta_lng * delta_lng).sqrt()
}
