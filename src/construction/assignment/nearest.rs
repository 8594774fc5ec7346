//! Phase two: nearest neighbor fill for the remaining vehicle types.

#[cfg(test)]
#[path = "../../../tests/unit/construction/assignment/nearest_test.rs"]
mod nearest_test;

use crate::algorithms::geo::haversine_distance;
use crate::construction::assignment::{AssignmentState, TripBuilder};
use crate::utils::compare_floats;

/// Fills the remaining vehicle types, in priority order, with the nearest unassigned
/// clusters: each vehicle grows its trip with the nearest feasible cluster relative to the
/// current trip centroid (the depot while the trip is empty) until nothing more fits. This
/// mops up small residual clusters close to each other which phase one skipped.
///
/// A vehicle is consumed only when at least one cluster was merged into its trip; when no
/// remaining cluster fits a fresh vehicle of some type, the fill moves to the next type.
pub fn assign_nearest_fill(state: &mut AssignmentState) {
    for type_idx in 1..state.pool.types().len() {
        while state.pool.remaining(type_idx) > 0 && !state.unassigned.is_empty() {
            let vehicle = state.pool.types()[type_idx].clone();
            let mut builder = TripBuilder::new(vehicle, state.depot, &state.config);

            loop {
                let anchor = builder.centroid().unwrap_or(state.depot);
                let nearest = state
                    .unassigned
                    .iter()
                    .enumerate()
                    .filter(|(_, cluster)| builder.evaluate(cluster).is_ok())
                    .min_by(|(_, a), (_, b)| {
                        let dist_a = haversine_distance(&anchor, &a.stats.centroid);
                        let dist_b = haversine_distance(&anchor, &b.stats.centroid);

                        compare_floats(dist_a, dist_b).then_with(|| a.min_shipment_id().cmp(&b.min_shipment_id()))
                    })
                    .map(|(idx, _)| idx);

                match nearest {
                    Some(idx) => builder.merge(state.unassigned.remove(idx)),
                    None => break,
                }
            }

            if builder.is_empty() {
                break;
            }

            let Some(vehicle_idx) = state.pool.take(type_idx) else { break };
            state.trips.push(builder.build(vehicle_idx));
        }
    }
}
