//! Stage three: size enforcement via farthest pair bisection.

#[cfg(test)]
#[path = "../../../tests/unit/construction/clustering/split_test.rs"]
mod split_test;

use crate::algorithms::geo::haversine_distance;
use crate::models::common::{Distance, ShipmentId};
use crate::models::problem::Shipment;
use crate::utils::{compare_floats, parallel_collect};
use std::cmp::Ordering;

/// Recursively splits a group until every part respects `max_cluster_size`.
///
/// The farthest pair of members seeds the split and every member joins the nearer seed.
/// Ties on the farthest pair are resolved by the lowest shipment id pair; ties on member
/// assignment go to the lower id seed. Each side keeps its seed, so both sides strictly
/// shrink and the recursion terminates. A group of one shipment is never split.
pub fn split_oversized(group: Vec<Shipment>, max_cluster_size: usize) -> Vec<Vec<Shipment>> {
    if group.len() <= max_cluster_size.max(1) {
        return vec![group];
    }

    let matrix = distance_matrix(&group);
    let (seed_a, seed_b) = farthest_pair(&group, &matrix);

    let mut left = Vec::new();
    let mut right = Vec::new();
    for (idx, shipment) in group.into_iter().enumerate() {
        let to_left = match compare_floats(matrix[idx][seed_a], matrix[idx][seed_b]) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => idx != seed_b,
        };

        if to_left { left.push(shipment) } else { right.push(shipment) }
    }

    let mut parts = split_oversized(left, max_cluster_size);
    parts.extend(split_oversized(right, max_cluster_size));

    parts
}

/// Builds the full pairwise distance matrix, one row per member, in parallel.
fn distance_matrix(group: &[Shipment]) -> Vec<Vec<Distance>> {
    parallel_collect(group, |from| {
        group.iter().map(|to| haversine_distance(&from.location, &to.location)).collect::<Vec<_>>()
    })
}

/// Finds the farthest pair of members; the returned pair is ordered so that the first seed
/// has the lower shipment id.
fn farthest_pair(group: &[Shipment], matrix: &[Vec<Distance>]) -> (usize, usize) {
    let mut best = (0, 1);
    let mut best_distance = Distance::MIN;

    for i in 0..group.len() {
        for j in (i + 1)..group.len() {
            match compare_floats(matrix[i][j], best_distance) {
                Ordering::Greater => {
                    best = (i, j);
                    best_distance = matrix[i][j];
                }
                Ordering::Equal if pair_key(group, (i, j)) < pair_key(group, best) => {
                    best = (i, j);
                }
                _ => {}
            }
        }
    }

    if group[best.0].id <= group[best.1].id { best } else { (best.1, best.0) }
}

fn pair_key(group: &[Shipment], (i, j): (usize, usize)) -> (ShipmentId, ShipmentId) {
    let (a, b) = (group[i].id, group[j].id);

    (a.min(b), a.max(b))
}
