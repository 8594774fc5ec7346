//! This module contains an implementation of Density-Based Spatial Clustering of
//! Applications with Noise (DBSCAN).

#[cfg(test)]
#[path = "../../tests/unit/algorithms/dbscan_test.rs"]
mod dbscan_test;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Represents a cluster of points.
pub type Cluster<'a, T> = Vec<&'a T>;

/// Result of a clustering pass: dense clusters plus the points which did not meet the
/// density requirement. Noise points are returned in input order so the caller can decide
/// their fate instead of losing them.
pub struct Clustering<'a, T> {
    /// Clusters in discovery order.
    pub clusters: Vec<Cluster<'a, T>>,
    /// Points not assigned to any cluster, in input order.
    pub noise: Vec<&'a T>,
}

/// Creates clusters of points using DBSCAN.
/// `points`: a list of points to cluster; iteration order pins the discovery order.
/// `min_points`: the minimum number of points required to form a dense cluster.
/// `neighborhood_fn`: returns neighbors of a given point, including the point itself;
/// the iteration order of neighbors must be deterministic for reproducible output.
pub fn create_clusters<'a, T, FN, IR>(points: &'a [T], min_points: usize, neighborhood_fn: FN) -> Clustering<'a, T>
where
    T: Hash + Eq,
    FN: Fn(&'a T) -> IR,
    IR: Iterator<Item = &'a T>,
{
    let mut point_types = HashMap::<&T, PointType>::new();
    let mut clusters = Vec::new();

    for point in points {
        if point_types.contains_key(point) {
            continue;
        }

        let mut neighbors = neighborhood_fn(point).collect::<Vec<_>>();
        let mut neighbors_index = neighbors.iter().cloned().collect::<HashSet<_>>();

        if neighbors.len() < min_points {
            point_types.insert(point, PointType::Noise);
        } else {
            let mut cluster = vec![point];
            point_types.insert(point, PointType::Clustered);

            let mut index = 0;
            while index < neighbors.len() {
                let other = neighbors[index];
                let other_type = point_types.get(other).cloned();

                if other_type.is_none() {
                    let other_neighbors = neighborhood_fn(other).collect::<Vec<_>>();
                    if other_neighbors.len() >= min_points {
                        neighbors
                            .extend(other_neighbors.iter().filter(|&point| !neighbors_index.contains(point)).cloned());
                        neighbors_index.extend(other_neighbors);
                    }
                }

                match other_type {
                    Some(PointType::Clustered) => {}
                    _ => {
                        point_types.insert(other, PointType::Clustered);
                        cluster.push(other);
                    }
                }

                index += 1;
            }

            clusters.push(cluster);
        }
    }

    let noise =
        points.iter().filter(|point| matches!(point_types.get(point), Some(PointType::Noise))).collect::<Vec<_>>();

    Clustering { clusters, noise }
}

#[derive(Clone, Eq, PartialEq)]
enum PointType {
    Noise,
    Clustered,
}
