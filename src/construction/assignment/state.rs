//! Mutable state threaded through the assignment phases.

#[cfg(test)]
#[path = "../../../tests/unit/construction/assignment/state_test.rs"]
mod state_test;

use crate::construction::assignment::depot_reach;
use crate::models::common::{Coordinate, Distance, Duration, TimeWindow};
use crate::models::problem::{PlanConfig, Problem, VehicleType};
use crate::models::solution::{Cluster, Trip, Unassigned, UnassignedReason};
use crate::utils::Float;
use std::sync::Arc;

/// Tracks how many vehicles of each type are still available. Counters only go down:
/// a vehicle is taken when its trip is finalized and never returned.
#[derive(Clone, Debug)]
pub struct VehiclePool {
    types: Vec<Arc<VehicleType>>,
    remaining: Vec<usize>,
    used: Vec<usize>,
}

impl VehiclePool {
    /// Creates a pool holding the per type counts from the fleet.
    pub fn new(types: &[Arc<VehicleType>]) -> Self {
        Self {
            types: types.to_vec(),
            remaining: types.iter().map(|vehicle| vehicle.count).collect(),
            used: vec![0; types.len()],
        }
    }

    /// Returns vehicle types in priority order.
    pub fn types(&self) -> &[Arc<VehicleType>] {
        self.types.as_slice()
    }

    /// Returns amount of vehicles of the given type still available.
    pub fn remaining(&self, type_idx: usize) -> usize {
        self.remaining.get(type_idx).copied().unwrap_or(0)
    }

    /// Takes one vehicle of the given type, returning its ordinal within the type.
    pub fn take(&mut self, type_idx: usize) -> Option<usize> {
        if self.remaining(type_idx) == 0 {
            return None;
        }

        self.remaining[type_idx] -= 1;
        self.used[type_idx] += 1;

        Some(self.used[type_idx] - 1)
    }
}

/// The shared mutable state of one assignment run: remaining clusters in creation order,
/// the vehicle pool, finalized trips and the unassignable report. Owned exclusively by the
/// assigner; no two runs interleave on the same state.
#[derive(Debug)]
pub struct AssignmentState {
    /// Clusters not yet merged into any trip, kept in creation order.
    pub unassigned: Vec<Cluster>,
    /// The vehicle pool.
    pub pool: VehiclePool,
    /// Finalized trips.
    pub trips: Vec<Trip>,
    /// Clusters with no feasible vehicle, with the violated constraint.
    pub unassignable: Vec<Unassigned>,
    /// The reference depot.
    pub depot: Coordinate,
    /// Planning thresholds.
    pub config: PlanConfig,
}

impl AssignmentState {
    /// Creates a fresh state for the given clusters and problem.
    pub fn new(clusters: Vec<Cluster>, problem: &Problem) -> Self {
        Self {
            unassigned: clusters,
            pool: VehiclePool::new(&problem.fleet.types),
            trips: Vec::new(),
            unassignable: Vec::new(),
            depot: problem.depot,
            config: problem.config.clone(),
        }
    }
}

/// Accumulates clusters into a trip candidate for one vehicle, keeping running payload,
/// time window and the farthest depot reach so that every merge can be evaluated without
/// rescanning merged members.
pub struct TripBuilder {
    vehicle: Arc<VehicleType>,
    depot: Coordinate,
    max_duration: Duration,
    max_distance: Distance,
    max_shipments: Option<usize>,
    clusters: Vec<Cluster>,
    payload: Float,
    window: Option<TimeWindow>,
    reach: Distance,
    shipment_count: usize,
}

impl TripBuilder {
    /// Creates a builder for a range and duration constrained trip (phases one and two).
    pub fn new(vehicle: Arc<VehicleType>, depot: Coordinate, config: &PlanConfig) -> Self {
        let max_distance = 2. * vehicle.range * (1. + config.range_buffer_percent / 100.);

        Self {
            vehicle,
            depot,
            max_duration: config.max_trip_duration,
            max_distance,
            max_shipments: None,
            clusters: Vec::new(),
            payload: 0.,
            window: None,
            reach: 0.,
            shipment_count: 0,
        }
    }

    /// Creates a builder for a consolidation batch (phase three): bounded by shipment
    /// count and batch window, with the range constraint lifted.
    pub fn batch(vehicle: Arc<VehicleType>, depot: Coordinate, config: &PlanConfig) -> Self {
        Self {
            vehicle,
            depot,
            max_duration: config.max_batch_window,
            max_distance: Distance::INFINITY,
            max_shipments: Some(config.max_batch_size),
            clusters: Vec::new(),
            payload: 0.,
            window: None,
            reach: 0.,
            shipment_count: 0,
        }
    }

    /// Checks whether the cluster can be merged without violating capacity, duration or
    /// the buffered range; returns the violated constraint otherwise.
    pub fn evaluate(&self, cluster: &Cluster) -> Result<(), UnassignedReason> {
        if self.payload + cluster.stats.demand > self.vehicle.capacity {
            return Err(UnassignedReason::Capacity);
        }

        let window = match &self.window {
            Some(window) => window.merged(&cluster.stats.time_window),
            None => cluster.stats.time_window.clone(),
        };
        if window.span() > self.max_duration {
            return Err(UnassignedReason::Duration);
        }

        if let Some(max_shipments) = self.max_shipments
            && self.shipment_count + cluster.size() > max_shipments
        {
            return Err(UnassignedReason::Capacity);
        }

        let reach = self.reach.max(depot_reach(cluster, &self.depot));
        if 2. * reach > self.max_distance {
            return Err(UnassignedReason::Range);
        }

        Ok(())
    }

    /// Merges the cluster into the trip candidate. The caller is responsible for checking
    /// feasibility via [`TripBuilder::evaluate`] first.
    pub fn merge(&mut self, cluster: Cluster) {
        self.payload += cluster.stats.demand;
        self.window = Some(match &self.window {
            Some(window) => window.merged(&cluster.stats.time_window),
            None => cluster.stats.time_window.clone(),
        });
        self.reach = self.reach.max(depot_reach(&cluster, &self.depot));
        self.shipment_count += cluster.size();
        self.clusters.push(cluster);
    }

    /// Checks whether any cluster was merged so far.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Returns the arithmetic mean coordinate over all merged shipments, if any.
    pub fn centroid(&self) -> Option<Coordinate> {
        let count = self.shipment_count;
        if count == 0 {
            return None;
        }

        let (lat, lng) = self
            .clusters
            .iter()
            .flat_map(|cluster| cluster.shipments.iter())
            .fold((0., 0.), |(lat, lng), shipment| (lat + shipment.location.lat, lng + shipment.location.lng));

        Some(Coordinate::new(lat / count as Float, lng / count as Float))
    }

    /// Returns merged clusters, consuming the builder.
    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }

    /// Finalizes the trip for the vehicle with the given ordinal.
    pub fn build(self, vehicle_idx: usize) -> Trip {
        let duration = self.window.as_ref().map_or(0., TimeWindow::span);

        Trip {
            vehicle: self.vehicle,
            vehicle_idx,
            clusters: self.clusters,
            distance: 2. * self.reach,
            duration,
            payload: self.payload,
        }
    }
}
