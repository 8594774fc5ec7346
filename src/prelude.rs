//! This module reimports commonly used types.

pub use crate::models::common::{Coordinate, Distance, Duration, ShipmentId, TimeWindow, Timestamp};
pub use crate::models::problem::{Fleet, PlanConfig, Problem, Shipment, VehicleType};
pub use crate::models::solution::{Cluster, Solution, Trip, Unassigned, UnassignedReason};

pub use crate::construction::assignment::assign_fleet;
pub use crate::construction::clustering::build_clusters;

pub use crate::solver::{InfoLogger, Solver, Telemetry, TelemetryMode, TripMetrics, create_trip_metrics};

pub use crate::format::{IngestionReport, ProblemDefinition, create_problem, read_problem, write_solution};

pub use crate::utils::{Float, GenericError, GenericResult, compare_floats};
