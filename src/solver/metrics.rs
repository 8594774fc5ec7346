//! Reporting primitives derived from finalized trips and clusters. Pure derivations:
//! nothing here mutates the solution.

#[cfg(test)]
#[path = "../../tests/unit/solver/metrics_test.rs"]
mod metrics_test;

use crate::algorithms::geo::haversine_distance;
use crate::models::common::{Coordinate, Distance, Duration};
use crate::models::problem::PlanConfig;
use crate::models::solution::{Cluster, Trip};
use crate::utils::Float;
use std::fmt;

/// Utilization ratios of one finalized trip: actual usage divided by the corresponding
/// vehicle maximum, used as a post hoc quality metric.
#[derive(Clone, Debug, PartialEq)]
pub struct TripMetrics {
    /// Payload divided by vehicle capacity.
    pub capacity_utilization: Float,
    /// Duration divided by the trip duration ceiling.
    pub time_utilization: Float,
    /// Distance divided by the doubled vehicle range.
    pub distance_utilization: Float,
}

/// Computes utilization ratios for a finalized trip.
pub fn create_trip_metrics(trip: &Trip, config: &PlanConfig) -> TripMetrics {
    TripMetrics {
        capacity_utilization: trip.payload / trip.vehicle.capacity,
        time_utilization: trip.duration / config.max_trip_duration,
        distance_utilization: trip.distance / (2. * trip.vehicle.range),
    }
}

/// Aggregate statistics over built clusters, reported through telemetry after the
/// clustering stage finishes.
#[derive(Clone, Debug)]
pub struct ClusteringSummary {
    /// Total amount of clusters.
    pub clusters: usize,
    /// Smallest cluster size.
    pub min_size: usize,
    /// Average cluster size.
    pub avg_size: Float,
    /// Largest cluster size.
    pub max_size: usize,
    /// Cluster count per size, ascending by size.
    pub size_histogram: Vec<(usize, usize)>,
    /// Average distance from a cluster centroid to its farthest member, kilometers.
    pub avg_radius: Distance,
    /// Largest distance from the depot to any member, kilometers.
    pub max_depot_distance: Distance,
    /// Average cluster time window span, minutes.
    pub avg_window: Duration,
}

/// Computes the clustering summary over all built clusters.
pub fn create_clustering_summary(clusters: &[Cluster], depot: &Coordinate) -> ClusteringSummary {
    let count = clusters.len();
    if count == 0 {
        return ClusteringSummary {
            clusters: 0,
            min_size: 0,
            avg_size: 0.,
            max_size: 0,
            size_histogram: Vec::new(),
            avg_radius: 0.,
            max_depot_distance: 0.,
            avg_window: 0.,
        };
    }

    let sizes = clusters.iter().map(Cluster::size).collect::<Vec<_>>();
    let mut size_histogram = Vec::<(usize, usize)>::new();
    for size in sizes.iter().copied() {
        match size_histogram.iter_mut().find(|(value, _)| *value == size) {
            Some((_, amount)) => *amount += 1,
            None => size_histogram.push((size, 1)),
        }
    }
    size_histogram.sort_by(|(a, _), (b, _)| a.cmp(b));

    let radius = |cluster: &Cluster| {
        cluster
            .shipments
            .iter()
            .map(|shipment| haversine_distance(&cluster.stats.centroid, &shipment.location))
            .fold(0., Float::max)
    };

    let max_depot_distance = clusters
        .iter()
        .flat_map(|cluster| cluster.shipments.iter())
        .map(|shipment| haversine_distance(depot, &shipment.location))
        .fold(0., Float::max);

    ClusteringSummary {
        clusters: count,
        min_size: sizes.iter().copied().min().unwrap_or(0),
        avg_size: sizes.iter().sum::<usize>() as Float / count as Float,
        max_size: sizes.iter().copied().max().unwrap_or(0),
        size_histogram,
        avg_radius: clusters.iter().map(radius).sum::<Float>() / count as Float,
        max_depot_distance,
        avg_window: clusters.iter().map(|cluster| cluster.stats.time_window.span()).sum::<Float>() / count as Float,
    }
}

impl fmt::Display for ClusteringSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sizes {}..{} (avg {:.1}), avg radius {:.2}km, max depot distance {:.2}km, avg window {:.0}m",
            self.min_size, self.max_size, self.avg_size, self.avg_radius, self.max_depot_distance, self.avg_window
        )
    }
}
