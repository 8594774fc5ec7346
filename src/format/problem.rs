//! The problem definition side of the tabular boundary.

#[cfg(test)]
#[path = "../../tests/unit/format/problem_test.rs"]
mod problem_test;

use crate::models::common::{Coordinate, Timestamp};
use crate::models::problem::{Fleet, PlanConfig, Problem, Shipment, VehicleType};
use crate::utils::{Float, GenericError, GenericResult};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// A raw shipment row as it arrives from the tabular source.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    /// A unique identifier.
    pub id: u64,
    /// Latitude, decimal degrees.
    pub latitude: Float,
    /// Longitude, decimal degrees.
    pub longitude: Float,
    /// Delivery timeslot, "HH:MM" or "HH:MM - HH:MM"; the slot start is used.
    pub timeslot: String,
    /// A unit weight/volume demand.
    pub demand: Float,
}

/// The whole problem definition as read from the tabular source.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDefinition {
    /// Shipment rows.
    pub shipments: Vec<ShipmentRecord>,
    /// Fleet specification rows.
    pub fleet: Vec<VehicleType>,
    /// The reference depot location.
    pub depot: Coordinate,
    /// Planning thresholds; missing fields take the documented defaults.
    #[serde(default)]
    pub config: PlanConfig,
}

/// A shipment row rejected at ingestion with the reason.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedRecord {
    /// The offending row id.
    pub id: u64,
    /// What made the row malformed.
    pub reason: String,
}

/// Result of problem ingestion: the typed problem plus per record rejections. Malformed
/// rows never abort the run; they are set aside and reported.
#[derive(Clone, Debug)]
pub struct IngestionReport {
    /// The typed problem holding every well formed shipment.
    pub problem: Problem,
    /// Rows rejected at ingestion.
    pub rejected: Vec<RejectedRecord>,
}

/// Parses a timeslot of the form "HH:MM" or "HH:MM - HH:MM" into minutes since midnight.
pub fn parse_timeslot(slot: &str) -> GenericResult<Timestamp> {
    let start = slot.split('-').next().unwrap_or_default().trim();

    let (hours, minutes) = start
        .split_once(':')
        .ok_or_else(|| GenericError::from(format!("invalid timeslot format: '{slot}'")))?;

    let hours = hours
        .trim()
        .parse::<u32>()
        .map_err(|_| GenericError::from(format!("invalid hours in timeslot: '{slot}'")))?;
    let minutes = minutes
        .trim()
        .parse::<u32>()
        .map_err(|_| GenericError::from(format!("invalid minutes in timeslot: '{slot}'")))?;

    if hours > 23 || minutes > 59 {
        return Err(format!("timeslot out of range: '{slot}'").into());
    }

    Ok((hours * 60 + minutes) as Timestamp)
}

/// Converts raw records into a typed problem, rejecting malformed rows individually
/// instead of aborting the whole run.
pub fn create_problem(definition: ProblemDefinition) -> IngestionReport {
    let mut shipments = Vec::with_capacity(definition.shipments.len());
    let mut rejected = Vec::new();
    let mut seen_ids = FxHashSet::default();

    for record in definition.shipments {
        match convert_record(&record, &mut seen_ids) {
            Ok(shipment) => shipments.push(shipment),
            Err(error) => rejected.push(RejectedRecord { id: record.id, reason: error.to_string() }),
        }
    }

    let problem = Problem {
        shipments,
        fleet: Fleet::new(definition.fleet),
        depot: definition.depot,
        config: definition.config,
    };

    IngestionReport { problem, rejected }
}

/// Reads a problem definition from a JSON source.
pub fn read_problem<R: Read>(reader: BufReader<R>) -> GenericResult<IngestionReport> {
    let definition: ProblemDefinition =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize problem: {err}"))?;

    Ok(create_problem(definition))
}

fn convert_record(record: &ShipmentRecord, seen_ids: &mut FxHashSet<u64>) -> GenericResult<Shipment> {
    if !seen_ids.insert(record.id) {
        return Err(format!("duplicate shipment id: {}", record.id).into());
    }

    let location = Coordinate::new(record.latitude, record.longitude);
    if !location.is_valid() {
        return Err(format!("invalid coordinates: ({}, {})", record.latitude, record.longitude).into());
    }

    if !record.demand.is_finite() || record.demand <= 0. {
        return Err(format!("demand must be positive, got {}", record.demand).into());
    }

    let timestamp = parse_timeslot(&record.timeslot)?;

    Ok(Shipment { id: record.id, location, timestamp, demand: record.demand })
}
