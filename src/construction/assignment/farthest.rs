//! Phase one: farthest first assignment for the priority vehicle type.

#[cfg(test)]
#[path = "../../../tests/unit/construction/assignment/farthest_test.rs"]
mod farthest_test;

use crate::construction::assignment::{AssignmentState, TripBuilder, centroid_distance};
use crate::utils::compare_floats;

/// Assigns clusters to vehicles of the highest priority type, processing clusters from the
/// farthest to the nearest relative to the depot. Each vehicle opens a trip with the
/// farthest feasible cluster and keeps absorbing further clusters in the same order while
/// merges stay feasible, maximizing utilization before the next vehicle is opened.
///
/// The phase ends when the type pool is exhausted or no remaining cluster can open a
/// feasible trip; leftovers are handled by the later phases.
pub fn assign_farthest_first(state: &mut AssignmentState) {
    if state.pool.types().is_empty() {
        return;
    }

    while state.pool.remaining(0) > 0 && !state.unassigned.is_empty() {
        let vehicle = state.pool.types()[0].clone();
        let mut builder = TripBuilder::new(vehicle, state.depot, &state.config);

        // snapshot of the farthest first visit order; depot distances do not change while
        // the trip is being filled, ties are pinned to the smallest shipment id
        let mut order = state
            .unassigned
            .iter()
            .map(|cluster| (cluster.id, centroid_distance(cluster, &state.depot), cluster.min_shipment_id()))
            .collect::<Vec<_>>();
        order.sort_by(|(_, dist_a, min_a), (_, dist_b, min_b)| {
            compare_floats(*dist_b, *dist_a).then_with(|| min_a.cmp(min_b))
        });

        for (cluster_id, ..) in order {
            let Some(position) = state.unassigned.iter().position(|cluster| cluster.id == cluster_id) else {
                continue;
            };

            if builder.evaluate(&state.unassigned[position]).is_ok() {
                builder.merge(state.unassigned.remove(position));
            }
        }

        if builder.is_empty() {
            break;
        }

        let Some(vehicle_idx) = state.pool.take(0) else { break };
        state.trips.push(builder.build(vehicle_idx));
    }
}
