//! Solution models: clusters, trips and unassigned shipments.

use crate::models::common::{Coordinate, Distance, Duration, ShipmentId, TimeWindow};
use crate::models::problem::{Shipment, VehicleType};
use crate::utils::Float;
use std::sync::Arc;

/// Aggregated statistics of a cluster, computed once after construction and cached.
///
/// Stats feed both reporting and assignment; they must be recomputed only when clusters
/// are merged, which the assigner does through its own running totals.
#[derive(Clone, Debug)]
pub struct ClusterStats {
    /// Arithmetic mean of member coordinates. An acceptable approximation of the true
    /// spherical centroid at delivery area scale.
    pub centroid: Coordinate,
    /// Total member demand.
    pub demand: Float,
    /// Maximum pairwise distance between members in kilometers.
    pub spread: Distance,
    /// The window covering all member timestamps.
    pub time_window: TimeWindow,
}

/// A group of shipments close in time and space: the atomic assignment unit.
#[derive(Clone, Debug)]
pub struct Cluster {
    /// A sequential identifier assigned in creation order, stable within a run.
    pub id: usize,
    /// Member shipments ordered by (timestamp, id).
    pub shipments: Vec<Shipment>,
    /// Cached statistics.
    pub stats: ClusterStats,
}

impl Cluster {
    /// Returns amount of member shipments.
    pub fn size(&self) -> usize {
        self.shipments.len()
    }

    /// Returns the smallest member shipment id, used as a deterministic tie breaker.
    pub fn min_shipment_id(&self) -> ShipmentId {
        self.shipments.iter().map(|shipment| shipment.id).min().unwrap_or(ShipmentId::MAX)
    }
}

/// One vehicle bound to an ordered sequence of clusters. Trips are terminal: once built
/// they are only reported, never mutated.
#[derive(Clone, Debug)]
pub struct Trip {
    /// The assigned vehicle type.
    pub vehicle: Arc<VehicleType>,
    /// Vehicle ordinal within its type, starting from zero.
    pub vehicle_idx: usize,
    /// Clusters merged into this trip, in merge order.
    pub clusters: Vec<Cluster>,
    /// Total round trip distance in kilometers.
    pub distance: Distance,
    /// Total trip duration in minutes.
    pub duration: Duration,
    /// Total payload.
    pub payload: Float,
}

impl Trip {
    /// Returns total amount of shipments on the trip.
    pub fn shipment_count(&self) -> usize {
        self.clusters.iter().map(|cluster| cluster.size()).sum()
    }

    /// Returns member shipments in cluster merge order.
    pub fn shipments(&self) -> impl Iterator<Item = &Shipment> + '_ {
        self.clusters.iter().flat_map(|cluster| cluster.shipments.iter())
    }
}

/// Specifies the constraint which left a cluster without a feasible vehicle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnassignedReason {
    /// Payload exceeds every vehicle capacity.
    Capacity,
    /// No vehicle range covers the round trip even with the buffer applied.
    Range,
    /// The cluster time span exceeds the trip duration ceiling.
    Duration,
    /// The fleet ran out of vehicles.
    NoVehicle,
}

impl UnassignedReason {
    /// Returns a stable reason code used in reports.
    pub fn code(&self) -> &'static str {
        match self {
            UnassignedReason::Capacity => "capacity",
            UnassignedReason::Range => "range",
            UnassignedReason::Duration => "duration",
            UnassignedReason::NoVehicle => "no_vehicle",
        }
    }

    /// Returns a human readable description of the violated constraint.
    pub fn description(&self) -> &'static str {
        match self {
            UnassignedReason::Capacity => "demand exceeds every vehicle capacity",
            UnassignedReason::Range => "round trip exceeds every vehicle range with buffer",
            UnassignedReason::Duration => "time span exceeds the trip duration limit",
            UnassignedReason::NoVehicle => "no vehicle left in the fleet",
        }
    }
}

/// A cluster which survived all assignment phases without a feasible vehicle.
/// This is a reportable outcome, not an error: the run completes with a partial solution.
#[derive(Clone, Debug)]
pub struct Unassigned {
    /// The cluster left behind.
    pub cluster: Cluster,
    /// The violated constraint.
    pub reason: UnassignedReason,
}

/// Final result of a planning run.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Finalized trips.
    pub trips: Vec<Trip>,
    /// Clusters with no feasible vehicle.
    pub unassigned: Vec<Unassigned>,
}
