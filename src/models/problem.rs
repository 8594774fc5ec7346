//! Problem models: shipments, the vehicle fleet and planning thresholds.

#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::common::{Coordinate, Distance, Duration, ShipmentId, Timestamp};
use crate::utils::Float;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable shipment record: one pickup or drop to serve.
///
/// Identity is defined by the id alone; ids are unique within a problem (enforced at ingestion).
#[derive(Clone, Debug)]
pub struct Shipment {
    /// A unique identifier.
    pub id: ShipmentId,
    /// A delivery location.
    pub location: Coordinate,
    /// A delivery deadline as minutes since midnight.
    pub timestamp: Timestamp,
    /// A unit weight/volume demand.
    pub demand: Float,
}

impl PartialEq for Shipment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shipment {}

impl Hash for Shipment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Represents one vehicle type of the fleet.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    /// A type tag, e.g. "three_wheeler".
    pub id: String,
    /// Amount of available vehicles of this type.
    pub count: usize,
    /// Maximum payload capacity.
    pub capacity: Float,
    /// Maximum one way operating range in kilometers.
    pub range: Distance,
    /// Priority rank: lower ranked types are consumed first.
    pub priority: usize,
}

/// Represents available vehicles to serve shipments.
///
/// The priority order of vehicle types is configuration, not control flow: types are kept
/// sorted by their priority rank and the assigner simply walks the list.
#[derive(Clone, Debug)]
pub struct Fleet {
    /// Vehicle types ordered by priority rank ascending, ties broken by type id.
    pub types: Vec<Arc<VehicleType>>,
}

impl Fleet {
    /// Creates a new instance of `Fleet` ordering vehicle types by their priority rank.
    pub fn new(mut types: Vec<VehicleType>) -> Self {
        types.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));

        Self { types: types.into_iter().map(Arc::new).collect() }
    }

    /// Returns the largest payload capacity available in the fleet, if any.
    pub fn max_capacity(&self) -> Option<Float> {
        self.types.iter().map(|vehicle| vehicle.capacity).reduce(Float::max)
    }

    /// Returns the overflow vehicle type used by batch consolidation: the last one in
    /// priority order.
    pub fn batch_type(&self) -> Option<&Arc<VehicleType>> {
        self.types.last()
    }
}

/// Scalar thresholds controlling clustering and assignment.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanConfig {
    /// Maximum time span of a cluster created by time windowing, minutes.
    pub max_time_gap: Duration,
    /// Density clustering radius, kilometers.
    pub geo_eps: Distance,
    /// Minimum amount of neighbors required to form a dense cluster.
    pub min_samples: usize,
    /// Maximum amount of shipments per cluster.
    pub max_cluster_size: usize,
    /// Safety margin added to a vehicle range before a trip is rejected, percents.
    pub range_buffer_percent: Float,
    /// Trip duration ceiling, minutes.
    pub max_trip_duration: Duration,
    /// Maximum amount of shipments per consolidation batch.
    pub max_batch_size: usize,
    /// Maximum time window of a consolidation batch, minutes.
    pub max_batch_window: Duration,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            max_time_gap: 25.,
            geo_eps: 0.15,
            min_samples: 1,
            max_cluster_size: 5,
            range_buffer_percent: 10.,
            max_trip_duration: 240.,
            max_batch_size: 25,
            max_batch_window: 240.,
        }
    }
}

/// Defines the planning problem.
#[derive(Clone, Debug)]
pub struct Problem {
    /// All well formed shipments.
    pub shipments: Vec<Shipment>,
    /// The vehicle fleet.
    pub fleet: Fleet,
    /// The reference depot location: every trip starts and ends here.
    pub depot: Coordinate,
    /// Planning thresholds.
    pub config: PlanConfig,
}
