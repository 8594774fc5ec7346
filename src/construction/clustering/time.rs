//! Stage one: sequential time windowing.

#[cfg(test)]
#[path = "../../../tests/unit/construction/clustering/time_test.rs"]
mod time_test;

use crate::models::common::{Duration, TimeWindow};
use crate::models::problem::Shipment;
use crate::utils::compare_floats;

/// Partitions shipments into groups whose time span (latest minus earliest timestamp) does
/// not exceed `max_time_gap` minutes and whose size does not exceed `max_cluster_size`.
///
/// Shipments are processed sorted by timestamp; the sort is stable, so ties keep the input
/// order. The pass is a single left to right greedy cut with no backtracking.
pub fn partition_by_time(shipments: &[Shipment], max_time_gap: Duration, max_cluster_size: usize) -> Vec<Vec<Shipment>> {
    let mut sorted = shipments.to_vec();
    sorted.sort_by(|a, b| compare_floats(a.timestamp, b.timestamp));

    let mut partitions: Vec<Vec<Shipment>> = Vec::new();
    let mut current: Vec<Shipment> = Vec::new();
    let mut window = TimeWindow::moment(0.);

    for shipment in sorted {
        if current.is_empty() {
            window = TimeWindow::moment(shipment.timestamp);
            current.push(shipment);
            continue;
        }

        let expanded = window.expanded(shipment.timestamp);
        if expanded.span() <= max_time_gap && current.len() < max_cluster_size {
            window = expanded;
            current.push(shipment);
        } else {
            partitions.push(std::mem::take(&mut current));
            window = TimeWindow::moment(shipment.timestamp);
            current.push(shipment);
        }
    }

    if !current.is_empty() {
        partitions.push(current);
    }

    partitions
}
