use crate::models::common::{Coordinate, Timestamp};
use crate::models::problem::{Fleet, PlanConfig, Problem, Shipment, VehicleType};
use crate::utils::Float;

/// Depot location used by default across tests.
pub const DEFAULT_DEPOT: Coordinate = Coordinate { lat: 12.9716, lng: 77.5946 };

pub fn test_shipment(id: u64, lat: Float, lng: Float, timestamp: Timestamp) -> Shipment {
    test_shipment_with_demand(id, lat, lng, timestamp, 1.)
}

pub fn test_shipment_with_demand(id: u64, lat: Float, lng: Float, timestamp: Timestamp, demand: Float) -> Shipment {
    Shipment { id, location: Coordinate::new(lat, lng), timestamp, demand }
}

pub fn test_vehicle_type(id: &str, count: usize, capacity: Float, range: Float, priority: usize) -> VehicleType {
    VehicleType { id: id.to_string(), count, capacity, range, priority }
}

pub fn test_fleet() -> Fleet {
    Fleet::new(vec![
        test_vehicle_type("three_wheeler", 2, 5., 15., 0),
        test_vehicle_type("four_wheeler_electric", 1, 8., 20., 1),
        test_vehicle_type("four_wheeler", 1, 25., 100., 2),
    ])
}

pub fn create_test_problem(shipments: Vec<Shipment>, fleet: Fleet, config: PlanConfig) -> Problem {
    Problem { shipments, fleet, depot: DEFAULT_DEPOT, config }
}
