use crate::construction::clustering::create_cluster_stats;
use crate::models::problem::Shipment;
use crate::models::solution::Cluster;

/// Creates a cluster with computed stats from the given shipments.
pub fn create_test_cluster(id: usize, shipments: Vec<Shipment>) -> Cluster {
    let stats = create_cluster_stats(&shipments);

    Cluster { id, shipments, stats }
}

/// Returns sorted shipment ids of one group.
pub fn sorted_ids(shipments: &[Shipment]) -> Vec<u64> {
    let mut ids = shipments.iter().map(|shipment| shipment.id).collect::<Vec<_>>();
    ids.sort_unstable();

    ids
}
