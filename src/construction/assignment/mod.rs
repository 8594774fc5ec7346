//! The dual greedy fleet assigner.
//!
//! Clusters are packed onto vehicles in three ordered phases: farthest first assignment
//! for the priority vehicle type, nearest neighbor fill for the remaining types, and batch
//! consolidation for the overflow type. Every merge decision re-checks capacity, trip
//! duration and buffered range. The phases share one mutable [`AssignmentState`] which is
//! passed explicitly from phase to phase; clusters which survive all phases are reported
//! as unassigned with the violated constraint.

mod batch;
mod farthest;
mod nearest;
mod state;

pub use self::batch::assign_batches;
pub use self::farthest::assign_farthest_first;
pub use self::nearest::assign_nearest_fill;
pub use self::state::{AssignmentState, TripBuilder, VehiclePool};

use crate::algorithms::geo::haversine_distance;
use crate::models::common::{Coordinate, Distance};
use crate::models::problem::Problem;
use crate::models::solution::{Cluster, Solution};
use crate::utils::Float;

/// Runs the three assignment phases over the clusters and returns finalized trips together
/// with the clusters no vehicle could serve.
pub fn assign_fleet(clusters: Vec<Cluster>, problem: &Problem) -> Solution {
    let mut state = AssignmentState::new(clusters, problem);

    assign_farthest_first(&mut state);
    assign_nearest_fill(&mut state);
    assign_batches(&mut state);

    // batch consolidation drains every remaining cluster into a trip or the report
    debug_assert!(state.unassigned.is_empty());

    Solution { trips: state.trips, unassigned: state.unassignable }
}

/// Distance from the depot to the cluster centroid, used for farthest/nearest ordering.
pub(crate) fn centroid_distance(cluster: &Cluster, depot: &Coordinate) -> Distance {
    haversine_distance(depot, &cluster.stats.centroid)
}

/// Distance from the depot to the farthest cluster member. The round trip to serve the
/// cluster is assumed to be twice this reach.
pub(crate) fn depot_reach(cluster: &Cluster, depot: &Coordinate) -> Distance {
    cluster.shipments.iter().map(|shipment| haversine_distance(depot, &shipment.location)).fold(0., Float::max)
}
