use super::*;

fn coord(lat: Float, lng: Float) -> Coordinate {
    Coordinate::new(lat, lng)
}

#[test]
fn can_compute_zero_distance_for_identical_points() {
    let point = coord(12.9716, 77.5946);

    assert_eq!(haversine_distance(&point, &point), 0.);
}

#[test]
fn can_compute_antipodal_distance() {
    let a = coord(0., 0.);
    let b = coord(0., 180.);

    let expected = std::f64::consts::PI * EARTH_RADIUS_KM;

    assert!((haversine_distance(&a, &b) - expected).abs() < 1E-6);
}

#[test]
fn can_compute_known_city_pair_distance() {
    // Bangalore to Chennai
    let a = coord(12.9716, 77.5946);
    let b = coord(13.0827, 80.2707);

    assert!((haversine_distance(&a, &b) - 290.2).abs() < 1.);
}

#[test]
fn can_compute_symmetric_distances() {
    let a = coord(12.9716, 77.5946);
    let b = coord(13.0827, 80.2707);

    assert!((haversine_distance(&a, &b) - haversine_distance(&b, &a)).abs() < 1E-9);
}

#[test]
fn can_convert_kilometers_to_degrees() {
    assert!((to_angular(KM_PER_DEGREE) - 1.).abs() < 1E-12);
    assert!((to_angular(0.15) - 0.15 / 111.).abs() < 1E-12);
}

#[test]
fn can_compute_planar_degree_distance() {
    assert_eq!(angular_distance(&coord(0., 0.), &coord(3., 4.)), 5.);
    assert_eq!(angular_distance(&coord(1., 1.), &coord(1., 1.)), 0.);
}
