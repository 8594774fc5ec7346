//! The trip table side of the tabular boundary.

#[cfg(test)]
#[path = "../../tests/unit/format/solution_test.rs"]
mod solution_test;

use crate::models::problem::PlanConfig;
use crate::models::solution::Solution;
use crate::solver::create_trip_metrics;
use crate::utils::{Float, GenericResult};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

/// One finalized trip row.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    /// Vehicle type tag.
    pub vehicle_type: String,
    /// Vehicle id, unique within the solution.
    pub vehicle_id: String,
    /// Member shipment ids in visit order.
    pub shipment_ids: Vec<u64>,
    /// Total round trip distance, kilometers.
    pub distance: Float,
    /// Total trip duration, minutes.
    pub duration: Float,
    /// Total payload.
    pub payload: Float,
    /// Payload divided by vehicle capacity.
    pub capacity_utilization: Float,
    /// Duration divided by the trip duration ceiling.
    pub time_utilization: Float,
    /// Distance divided by the doubled vehicle range.
    pub distance_utilization: Float,
}

/// One unassigned cluster row with the violated constraint.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedRecord {
    /// Member shipment ids.
    pub shipment_ids: Vec<u64>,
    /// A stable reason code.
    pub code: String,
    /// Human readable description of the violated constraint.
    pub description: String,
}

/// The solution as written to the tabular boundary: one row per finalized trip plus the
/// unassigned list.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripTable {
    /// Finalized trip rows.
    pub trips: Vec<TripRecord>,
    /// Unassigned cluster rows.
    pub unassigned: Vec<UnassignedRecord>,
}

/// Converts a solution into its tabular form.
pub fn create_trip_table(solution: &Solution, config: &PlanConfig) -> TripTable {
    let trips = solution
        .trips
        .iter()
        .map(|trip| {
            let metrics = create_trip_metrics(trip, config);

            TripRecord {
                vehicle_type: trip.vehicle.id.clone(),
                vehicle_id: format!("{}_{}", trip.vehicle.id, trip.vehicle_idx),
                shipment_ids: trip.shipments().map(|shipment| shipment.id).collect(),
                distance: trip.distance,
                duration: trip.duration,
                payload: trip.payload,
                capacity_utilization: metrics.capacity_utilization,
                time_utilization: metrics.time_utilization,
                distance_utilization: metrics.distance_utilization,
            }
        })
        .collect();

    let unassigned = solution
        .unassigned
        .iter()
        .map(|unassigned| UnassignedRecord {
            shipment_ids: unassigned.cluster.shipments.iter().map(|shipment| shipment.id).collect(),
            code: unassigned.reason.code().to_string(),
            description: unassigned.reason.description().to_string(),
        })
        .collect();

    TripTable { trips, unassigned }
}

/// Writes the solution as JSON into the given writer.
pub fn write_solution<W: Write>(writer: BufWriter<W>, solution: &Solution, config: &PlanConfig) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, &create_trip_table(solution, config))
        .map_err(|err| format!("cannot serialize solution: {err}").into())
}
