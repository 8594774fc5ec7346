//! Stage two: density clustering within one time partition.

#[cfg(test)]
#[path = "../../../tests/unit/construction/clustering/density_test.rs"]
mod density_test;

use crate::algorithms::dbscan::create_clusters;
use crate::algorithms::geo::{angular_distance, to_angular};
use crate::models::common::Distance;
use crate::models::problem::Shipment;
use crate::utils::compare_floats;
use rustc_hash::FxHashMap;

/// Splits one time partition into geographically compact groups using density clustering
/// with radius `geo_eps` kilometers (converted to degrees for the angular metric).
///
/// Shipments which do not meet the density requirement keep their own singleton group:
/// noise is never dropped, every shipment ends up in exactly one group.
pub fn partition_by_density(shipments: &[Shipment], geo_eps: Distance, min_samples: usize) -> Vec<Vec<Shipment>> {
    let epsilon = to_angular(geo_eps);

    // neighborhoods are precomputed and distance ordered with id as tie breaker, which
    // pins the dbscan discovery order
    let neighborhood: FxHashMap<_, _> = shipments
        .iter()
        .map(|center| {
            let mut neighbors = shipments
                .iter()
                .map(|other| (other, angular_distance(&center.location, &other.location)))
                .filter(|(_, distance)| *distance <= epsilon)
                .collect::<Vec<_>>();
            neighbors.sort_by(|(a, dist_a), (b, dist_b)| compare_floats(*dist_a, *dist_b).then_with(|| a.id.cmp(&b.id)));

            (center, neighbors.into_iter().map(|(other, _)| other).collect::<Vec<_>>())
        })
        .collect();

    let neighborhood_fn =
        |shipment: &Shipment| neighborhood.get(shipment).map(|all| all.iter().copied()).into_iter().flatten();

    let clustering = create_clusters(shipments, min_samples, neighborhood_fn);

    let mut groups = clustering
        .clusters
        .into_iter()
        .map(|cluster| cluster.into_iter().cloned().collect::<Vec<_>>())
        .collect::<Vec<_>>();
    groups.extend(clustering.noise.into_iter().map(|shipment| vec![shipment.clone()]));

    groups
}
