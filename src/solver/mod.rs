//! Orchestrates the planning pipeline: validation, cluster construction, fleet
//! assignment and reporting.

#[cfg(test)]
#[path = "../../tests/unit/solver/pipeline_test.rs"]
mod pipeline_test;

mod metrics;
pub use self::metrics::*;

mod telemetry;
pub use self::telemetry::*;

use crate::construction::assignment::assign_fleet;
use crate::construction::clustering::build_clusters;
use crate::models::problem::Problem;
use crate::models::solution::Solution;
use crate::utils::{GenericResult, Timer};
use crate::validation::ValidationContext;

/// Solves the planning problem: groups shipments into clusters and assigns the clusters to
/// the fleet. The pipeline is single threaded and synchronous by design: each greedy
/// decision depends on the state left by prior decisions, so only bulk distance
/// computations run in parallel underneath.
pub struct Solver {
    problem: Problem,
    telemetry: Telemetry,
}

impl Solver {
    /// Creates a new instance of `Solver` with telemetry turned off.
    pub fn new(problem: Problem) -> Self {
        Self { problem, telemetry: Telemetry::new(TelemetryMode::None) }
    }

    /// Sets the telemetry used to report pipeline progress.
    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Runs the pipeline and returns the solution with finalized trips and the list of
    /// unassignable clusters. Configuration errors fail fast before any clustering starts.
    pub fn solve(self) -> GenericResult<Solution> {
        ValidationContext::new(&self.problem).validate()?;

        let timer = Timer::start();
        let clusters = build_clusters(&self.problem.shipments, &self.problem.config);
        let summary = create_clustering_summary(&clusters, &self.problem.depot);
        self.telemetry.log(&format!(
            "created {} clusters from {} shipments in {}ms: {}",
            clusters.len(),
            self.problem.shipments.len(),
            timer.elapsed_millis(),
            summary
        ));

        let timer = Timer::start();
        let solution = assign_fleet(clusters, &self.problem);
        self.telemetry.log(&format!(
            "assigned {} trips, {} clusters unassignable in {}ms",
            solution.trips.len(),
            solution.unassigned.len(),
            timer.elapsed_millis()
        ));

        Ok(solution)
    }
}
