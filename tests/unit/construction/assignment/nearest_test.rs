use super::*;
use crate::helpers::construction::create_test_cluster;
use crate::helpers::models::{create_test_problem, test_shipment, test_shipment_with_demand, test_vehicle_type};
use crate::models::problem::{Fleet, PlanConfig};
use crate::models::solution::Cluster;

fn create_state(clusters: Vec<Cluster>, fleet: Fleet) -> AssignmentState {
    let problem = create_test_problem(vec![], fleet, PlanConfig::default());

    AssignmentState::new(clusters, &problem)
}

fn two_type_fleet(count: usize, capacity: f64) -> Fleet {
    Fleet::new(vec![
        test_vehicle_type("three_wheeler", 0, 5., 15., 0),
        test_vehicle_type("four_wheeler", count, capacity, 100., 1),
    ])
}

#[test]
fn can_fill_trip_from_nearest_to_farthest() {
    // ~5 km and ~10 km north of the depot
    let near = create_test_cluster(0, vec![test_shipment(1, 13.0166, 77.5946, 600.)]);
    let far = create_test_cluster(1, vec![test_shipment(2, 13.0616, 77.5946, 610.)]);

    let mut state = create_state(vec![far, near], two_type_fleet(1, 10.));
    assign_nearest_fill(&mut state);

    assert_eq!(state.trips.len(), 1);
    assert_eq!(state.trips[0].clusters.iter().map(|c| c.id).collect::<Vec<_>>(), vec![0, 1]);
    assert!(state.unassigned.is_empty());
}

#[test]
fn can_keep_vehicle_when_nothing_fits() {
    let heavy = create_test_cluster(0, vec![test_shipment_with_demand(1, 13.0166, 77.5946, 600., 50.)]);

    let mut state = create_state(vec![heavy], two_type_fleet(1, 10.));
    assign_nearest_fill(&mut state);

    assert!(state.trips.is_empty());
    assert_eq!(state.unassigned.len(), 1);
    assert_eq!(state.pool.remaining(1), 1);
}

#[test]
fn can_skip_the_priority_type() {
    // phase two never touches the priority type pool, even when it has vehicles left
    let cluster = create_test_cluster(0, vec![test_shipment(1, 13.0166, 77.5946, 600.)]);
    let fleet = Fleet::new(vec![test_vehicle_type("three_wheeler", 2, 5., 15., 0)]);

    let mut state = create_state(vec![cluster], fleet);
    assign_nearest_fill(&mut state);

    assert!(state.trips.is_empty());
    assert_eq!(state.pool.remaining(0), 2);
    assert_eq!(state.unassigned.len(), 1);
}

#[test]
fn can_open_next_vehicle_for_leftovers() {
    let first = create_test_cluster(0, vec![test_shipment_with_demand(1, 13.0166, 77.5946, 600., 4.)]);
    let second = create_test_cluster(1, vec![test_shipment_with_demand(2, 13.0616, 77.5946, 610., 4.)]);

    let mut state = create_state(vec![first, second], two_type_fleet(2, 5.));
    assign_nearest_fill(&mut state);

    assert_eq!(state.trips.len(), 2);
    assert_eq!(state.pool.remaining(1), 0);
    assert!(state.unassigned.is_empty());
}
