//! Groups raw shipments into atomic delivery clusters: sequential time windowing, then a
//! density pass within each time partition, then size bounded splitting.

mod density;
mod split;
mod stats;
mod time;

pub use self::density::partition_by_density;
pub use self::split::split_oversized;
pub use self::stats::create_cluster_stats;
pub use self::time::partition_by_time;

use crate::models::problem::{PlanConfig, Shipment};
use crate::models::solution::Cluster;
use crate::utils::compare_floats;

/// Builds delivery clusters from raw shipments.
///
/// Time partitions act as a hard boundary: the density pass never merges shipments across
/// them. The whole pass is deterministic and never fails for well formed input; an empty
/// input yields no clusters.
pub fn build_clusters(shipments: &[Shipment], config: &PlanConfig) -> Vec<Cluster> {
    partition_by_time(shipments, config.max_time_gap, config.max_cluster_size)
        .iter()
        .flat_map(|partition| partition_by_density(partition, config.geo_eps, config.min_samples))
        .flat_map(|group| split_oversized(group, config.max_cluster_size))
        .enumerate()
        .map(|(id, mut shipments)| {
            shipments.sort_by(|a, b| compare_floats(a.timestamp, b.timestamp).then_with(|| a.id.cmp(&b.id)));
            let stats = create_cluster_stats(&shipments);

            Cluster { id, shipments, stats }
        })
        .collect()
}
