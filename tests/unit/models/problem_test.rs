use super::*;
use crate::helpers::models::test_vehicle_type;

#[test]
fn can_order_fleet_types_by_priority() {
    let fleet = Fleet::new(vec![
        test_vehicle_type("four_wheeler", 1, 25., 100., 2),
        test_vehicle_type("three_wheeler", 2, 5., 15., 0),
        test_vehicle_type("four_wheeler_electric", 1, 8., 20., 1),
    ]);

    let ids = fleet.types.iter().map(|vehicle| vehicle.id.clone()).collect::<Vec<_>>();

    assert_eq!(ids, vec!["three_wheeler", "four_wheeler_electric", "four_wheeler"]);
}

#[test]
fn can_break_priority_ties_by_type_id() {
    let fleet = Fleet::new(vec![test_vehicle_type("bbb", 1, 5., 15., 0), test_vehicle_type("aaa", 1, 5., 15., 0)]);

    let ids = fleet.types.iter().map(|vehicle| vehicle.id.clone()).collect::<Vec<_>>();

    assert_eq!(ids, vec!["aaa", "bbb"]);
}

#[test]
fn can_find_max_capacity() {
    let fleet = Fleet::new(vec![
        test_vehicle_type("three_wheeler", 2, 5., 15., 0),
        test_vehicle_type("four_wheeler", 1, 25., 100., 1),
    ]);

    assert_eq!(fleet.max_capacity(), Some(25.));
    assert_eq!(Fleet::new(vec![]).max_capacity(), None);
}

#[test]
fn can_pick_last_priority_type_for_batches() {
    let fleet = Fleet::new(vec![
        test_vehicle_type("three_wheeler", 2, 5., 15., 0),
        test_vehicle_type("four_wheeler", 1, 25., 100., 1),
    ]);

    assert_eq!(fleet.batch_type().map(|vehicle| vehicle.id.as_str()), Some("four_wheeler"));
    assert!(Fleet::new(vec![]).batch_type().is_none());
}

#[test]
fn can_use_documented_config_defaults() {
    let config = PlanConfig::default();

    assert_eq!(config.max_time_gap, 25.);
    assert_eq!(config.geo_eps, 0.15);
    assert_eq!(config.min_samples, 1);
    assert_eq!(config.max_cluster_size, 5);
    assert_eq!(config.max_trip_duration, 240.);
}

#[test]
fn can_compare_shipments_by_id_only() {
    let a = Shipment { id: 1, location: Coordinate::new(1., 1.), timestamp: 0., demand: 1. };
    let b = Shipment { id: 1, location: Coordinate::new(2., 2.), timestamp: 10., demand: 5. };
    let c = Shipment { id: 2, location: Coordinate::new(1., 1.), timestamp: 0., demand: 1. };

    assert_eq!(a, b);
    assert_ne!(a, c);
}
