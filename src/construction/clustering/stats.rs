//! Cached per cluster statistics.

#[cfg(test)]
#[path = "../../../tests/unit/construction/clustering/stats_test.rs"]
mod stats_test;

use crate::algorithms::geo::haversine_distance;
use crate::models::common::{Coordinate, TimeWindow};
use crate::models::problem::Shipment;
use crate::models::solution::ClusterStats;
use crate::utils::{Float, map_reduce};

/// Computes centroid, total demand, spread and time window for cluster members.
///
/// The spread is the maximum pairwise member distance: a cheap proxy for the cluster
/// radius which avoids solving the exact intra cluster tour.
pub fn create_cluster_stats(shipments: &[Shipment]) -> ClusterStats {
    assert!(!shipments.is_empty(), "cluster cannot be empty");

    let size = shipments.len() as Float;
    let (lat_sum, lng_sum) = shipments
        .iter()
        .fold((0., 0.), |(lat, lng), shipment| (lat + shipment.location.lat, lng + shipment.location.lng));

    let centroid = Coordinate::new(lat_sum / size, lng_sum / size);
    let demand = shipments.iter().map(|shipment| shipment.demand).sum();

    let time_window = shipments
        .iter()
        .skip(1)
        .fold(TimeWindow::moment(shipments[0].timestamp), |window, shipment| window.expanded(shipment.timestamp));

    let spread = map_reduce(
        shipments,
        |from| {
            shipments
                .iter()
                .map(|to| haversine_distance(&from.location, &to.location))
                .fold(0., Float::max)
        },
        || 0.,
        Float::max,
    );

    ClusterStats { centroid, demand, spread, time_window }
}
