use super::*;
use crate::helpers::construction::create_test_cluster;
use crate::helpers::models::{create_test_problem, test_shipment, test_vehicle_type};
use crate::models::problem::{Fleet, PlanConfig};

fn create_state(clusters: Vec<crate::models::solution::Cluster>, fleet: Fleet) -> AssignmentState {
    let problem = create_test_problem(vec![], fleet, PlanConfig::default());

    AssignmentState::new(clusters, &problem)
}

#[test]
fn can_seed_with_farthest_cluster_and_absorb_nearer_ones() {
    // ~30 km and ~5 km north of the depot
    let far = create_test_cluster(0, vec![test_shipment(1, 13.2416, 77.5946, 600.)]);
    let near = create_test_cluster(1, vec![test_shipment(2, 13.0166, 77.5946, 610.)]);
    let fleet = Fleet::new(vec![test_vehicle_type("three_wheeler", 1, 10., 40., 0)]);

    let mut state = create_state(vec![near, far], fleet);
    assign_farthest_first(&mut state);

    assert_eq!(state.trips.len(), 1);
    assert_eq!(state.trips[0].clusters.iter().map(|c| c.id).collect::<Vec<_>>(), vec![0, 1]);
    assert!(state.unassigned.is_empty());
    assert_eq!(state.pool.remaining(0), 0);
}

#[test]
fn can_skip_clusters_beyond_buffered_range() {
    // ~111 km away while the buffered range covers only 2 x 15 x 1.1 km round trip
    let beyond = create_test_cluster(0, vec![test_shipment(1, 13.9716, 77.5946, 600.)]);
    let within = create_test_cluster(1, vec![test_shipment(2, 13.0166, 77.5946, 610.)]);
    let fleet = Fleet::new(vec![test_vehicle_type("three_wheeler", 1, 10., 15., 0)]);

    let mut state = create_state(vec![beyond, within], fleet);
    assign_farthest_first(&mut state);

    assert_eq!(state.trips.len(), 1);
    assert_eq!(state.trips[0].clusters.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(state.unassigned.iter().map(|c| c.id).collect::<Vec<_>>(), vec![0]);
}

#[test]
fn can_stop_when_no_cluster_is_feasible() {
    let beyond = create_test_cluster(0, vec![test_shipment(1, 13.9716, 77.5946, 600.)]);
    let fleet = Fleet::new(vec![test_vehicle_type("three_wheeler", 5, 10., 15., 0)]);

    let mut state = create_state(vec![beyond], fleet);
    assign_farthest_first(&mut state);

    assert!(state.trips.is_empty());
    assert_eq!(state.unassigned.len(), 1);
    // infeasible clusters must not burn vehicles
    assert_eq!(state.pool.remaining(0), 5);
}

#[test]
fn can_open_one_trip_per_vehicle() {
    // two clusters too heavy to share one vehicle
    let first = create_test_cluster(0, vec![test_shipment(1, 13.0166, 77.5946, 600.)]);
    let second = create_test_cluster(1, vec![test_shipment(2, 13.0166, 77.6046, 700.)]);
    let fleet = Fleet::new(vec![test_vehicle_type("three_wheeler", 2, 1., 40., 0)]);

    let mut state = create_state(vec![first, second], fleet);
    assign_farthest_first(&mut state);

    assert_eq!(state.trips.len(), 2);
    assert_eq!(state.pool.remaining(0), 0);
    assert!(state.unassigned.is_empty());
}

#[test]
fn can_handle_empty_fleet() {
    let cluster = create_test_cluster(0, vec![test_shipment(1, 13.0166, 77.5946, 600.)]);

    let mut state = create_state(vec![cluster], Fleet::new(vec![]));
    assign_farthest_first(&mut state);

    assert!(state.trips.is_empty());
    assert_eq!(state.unassigned.len(), 1);
}
