//! Phase three: batch consolidation for the overflow vehicle type.

#[cfg(test)]
#[path = "../../../tests/unit/construction/assignment/batch_test.rs"]
mod batch_test;

use crate::construction::assignment::{AssignmentState, TripBuilder, VehiclePool, depot_reach};
use crate::models::common::Coordinate;
use crate::models::problem::PlanConfig;
use crate::models::solution::{Cluster, Unassigned, UnassignedReason};

/// Groups every remaining cluster, in creation order, into consolidation batches for the
/// last priority (largest capacity) vehicle type. Batches are bounded by shipment count
/// and time window; the range constraint is lifted as the overflow type is assumed to
/// cover the whole service area. A batch is closed as soon as the next cluster does not
/// fit and a new one is opened.
///
/// Clusters which cannot join any batch are reported with the violated constraint; the
/// phase drains the unassigned set completely.
pub fn assign_batches(state: &mut AssignmentState) {
    let clusters = std::mem::take(&mut state.unassigned);

    let Some(vehicle) = state.pool.types().last().cloned() else {
        state
            .unassignable
            .extend(clusters.into_iter().map(|cluster| Unassigned { cluster, reason: UnassignedReason::NoVehicle }));
        return;
    };
    let type_idx = state.pool.types().len() - 1;

    let mut builder: Option<TripBuilder> = None;

    for cluster in clusters {
        let fits_fresh =
            TripBuilder::batch(vehicle.clone(), state.depot, &state.config).evaluate(&cluster).is_ok();
        if !fits_fresh {
            let reason = diagnose(&cluster, &state.pool, &state.config, state.depot);
            state.unassignable.push(Unassigned { cluster, reason });
            continue;
        }

        if let Some(current) = builder.as_mut() {
            if current.evaluate(&cluster).is_ok() {
                current.merge(cluster);
                continue;
            }

            // the batch is full: finalize it before opening the next one
            finalize(state, type_idx, builder.take());
        }

        if state.pool.remaining(type_idx) == 0 {
            let reason = diagnose(&cluster, &state.pool, &state.config, state.depot);
            state.unassignable.push(Unassigned { cluster, reason });
            continue;
        }

        let mut next = TripBuilder::batch(vehicle.clone(), state.depot, &state.config);
        next.merge(cluster);
        builder = Some(next);
    }

    finalize(state, type_idx, builder.take());
}

fn finalize(state: &mut AssignmentState, type_idx: usize, builder: Option<TripBuilder>) {
    let Some(builder) = builder else { return };
    if builder.is_empty() {
        return;
    }

    match state.pool.take(type_idx) {
        Some(vehicle_idx) => state.trips.push(builder.build(vehicle_idx)),
        None => state.unassignable.extend(
            builder
                .into_clusters()
                .into_iter()
                .map(|cluster| Unassigned { cluster, reason: UnassignedReason::NoVehicle }),
        ),
    }
}

/// Names the constraint which keeps the cluster out of any trip: capacity when its demand
/// exceeds every vehicle type, duration when its own time span breaks both ceilings, range
/// when no buffered range covers the round trip, otherwise the fleet ran out of vehicles.
fn diagnose(cluster: &Cluster, pool: &VehiclePool, config: &PlanConfig, depot: Coordinate) -> UnassignedReason {
    let types = pool.types();
    if types.is_empty() {
        return UnassignedReason::NoVehicle;
    }

    if types.iter().all(|vehicle| cluster.stats.demand > vehicle.capacity) {
        return UnassignedReason::Capacity;
    }

    if cluster.stats.time_window.span() > config.max_trip_duration.max(config.max_batch_window) {
        return UnassignedReason::Duration;
    }

    let round_trip = 2. * depot_reach(cluster, &depot);
    let buffer = 1. + config.range_buffer_percent / 100.;
    if types.iter().all(|vehicle| round_trip > 2. * vehicle.range * buffer) {
        return UnassignedReason::Range;
    }

    UnassignedReason::NoVehicle
}
