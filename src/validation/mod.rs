//! This module provides functionality to validate the problem definition for logical
//! correctness before any clustering begins. Validation failures are fatal for the run,
//! unlike per record ingestion rejections and assignment phase infeasibility.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::models::problem::Problem;
use crate::utils::GenericResult;

/// A validation context over the typed problem.
pub struct ValidationContext<'a> {
    problem: &'a Problem,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Validates the problem on the full rule set.
    pub fn validate(&self) -> GenericResult<()> {
        let errors = check_e1001_clustering_thresholds(self)
            .err()
            .iter()
            .cloned()
            .chain(check_e1002_assignment_thresholds(self).err().iter().cloned())
            .chain(check_e1003_no_vehicle_types_with_duplicate_ids(self).err().iter().cloned())
            .chain(check_e1004_vehicle_limits_positive(self).err().iter().cloned())
            .chain(check_e1005_depot_location(self).err().iter().cloned())
            .collect::<Vec<_>>();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(format!("problem has the following validation errors: {}", errors.join(", ")).into())
        }
    }
}

/// Checks that clustering thresholds are positive and consistent.
fn check_e1001_clustering_thresholds(ctx: &ValidationContext) -> Result<(), String> {
    let config = &ctx.problem.config;

    if config.min_samples < 1 {
        return Err("E1001: min_samples must be at least 1".to_string());
    }
    if config.max_cluster_size < 1 {
        return Err("E1001: max_cluster_size must be at least 1".to_string());
    }
    if !(config.max_time_gap > 0.) {
        return Err(format!("E1001: max_time_gap must be positive, got {}", config.max_time_gap));
    }
    if !(config.geo_eps > 0.) {
        return Err(format!("E1001: geo_eps must be positive, got {}", config.geo_eps));
    }

    Ok(())
}

/// Checks that assignment thresholds are positive and not contradictory.
fn check_e1002_assignment_thresholds(ctx: &ValidationContext) -> Result<(), String> {
    let config = &ctx.problem.config;

    if !(config.max_trip_duration > 0.) {
        return Err(format!("E1002: max_trip_duration must be positive, got {}", config.max_trip_duration));
    }
    if !(config.max_batch_window > 0.) {
        return Err(format!("E1002: max_batch_window must be positive, got {}", config.max_batch_window));
    }
    if !(config.range_buffer_percent >= 0.) {
        return Err(format!("E1002: range_buffer_percent cannot be negative, got {}", config.range_buffer_percent));
    }
    if config.max_batch_size < 1 {
        return Err("E1002: max_batch_size must be at least 1".to_string());
    }
    if config.max_batch_size < config.max_cluster_size {
        return Err(format!(
            "E1002: max_batch_size ({}) cannot be smaller than max_cluster_size ({})",
            config.max_batch_size, config.max_cluster_size
        ));
    }

    Ok(())
}

/// Checks that the fleet has no vehicle types with duplicate ids.
fn check_e1003_no_vehicle_types_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), String> {
    let mut ids = ctx.problem.fleet.types.iter().map(|vehicle| vehicle.id.as_str()).collect::<Vec<_>>();
    ids.sort_unstable();

    let duplicates = ids.windows(2).filter(|pair| pair[0] == pair[1]).map(|pair| pair[0]).collect::<Vec<_>>();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(format!("E1003: duplicated vehicle type ids: {}", duplicates.join(", ")))
    }
}

/// Checks that every vehicle type has positive capacity and range.
fn check_e1004_vehicle_limits_positive(ctx: &ValidationContext) -> Result<(), String> {
    let type_ids = ctx
        .problem
        .fleet
        .types
        .iter()
        .filter(|vehicle| !(vehicle.capacity > 0.) || !(vehicle.range > 0.))
        .map(|vehicle| vehicle.id.clone())
        .collect::<Vec<_>>();

    if type_ids.is_empty() {
        Ok(())
    } else {
        Err(format!("E1004: non positive capacity or range in vehicle types: {}", type_ids.join(", ")))
    }
}

/// Checks that the depot location is well formed.
fn check_e1005_depot_location(ctx: &ValidationContext) -> Result<(), String> {
    if ctx.problem.depot.is_valid() {
        Ok(())
    } else {
        Err(format!("E1005: invalid depot location: ({}, {})", ctx.problem.depot.lat, ctx.problem.depot.lng))
    }
}
