//! Common primitive types shared by problem and solution models.

#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

use crate::utils::{Float, compare_floats};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Represents a timestamp as minutes since midnight.
pub type Timestamp = Float;

/// Specifies a distance in kilometers.
pub type Distance = Float;

/// Specifies a duration in minutes.
pub type Duration = Float;

/// A unique shipment identifier, used as the deterministic tie breaker across the pipeline.
pub type ShipmentId = u64;

/// Returns the absolute difference between two timestamps in minutes.
pub fn elapsed_minutes(t1: Timestamp, t2: Timestamp) -> Duration {
    (t1 - t2).abs()
}

/// A geographic location as decimal degrees.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Coordinate {
    /// Latitude, degrees.
    pub lat: Float,
    /// Longitude, degrees.
    pub lng: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: Float, lng: Float) -> Self {
        Self { lat, lng }
    }

    /// Checks that both components are finite and within valid degree ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && self.lat.abs() <= 90. && self.lng.abs() <= 180.
    }

    fn transmute(&self) -> (i64, i64) {
        (self.lat.to_bits() as i64, self.lng.to_bits() as i64)
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (lat, lng) = self.transmute();
        lat.hash(state);
        lng.hash(state);
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.transmute() == other.transmute()
    }
}

impl Eq for Coordinate {}

/// Represents a time window.
#[derive(Clone, Debug)]
pub struct TimeWindow {
    /// Earliest timestamp.
    pub start: Timestamp,
    /// Latest timestamp.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new instance of `TimeWindow`.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns a window covering a single moment in time.
    pub fn moment(timestamp: Timestamp) -> Self {
        Self { start: timestamp, end: timestamp }
    }

    /// Returns the width of the window in minutes.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// Returns the smallest window containing this window and the given timestamp.
    pub fn expanded(&self, timestamp: Timestamp) -> Self {
        Self { start: self.start.min(timestamp), end: self.end.max(timestamp) }
    }

    /// Returns the smallest window containing both windows.
    pub fn merged(&self, other: &Self) -> Self {
        Self { start: self.start.min(other.start), end: self.end.max(other.end) }
    }

    /// Checks whether the window has an intersection with another one.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl PartialEq<TimeWindow> for TimeWindow {
    fn eq(&self, other: &TimeWindow) -> bool {
        compare_floats(self.start, other.start) == Ordering::Equal
            && compare_floats(self.end, other.end) == Ordering::Equal
    }
}

impl Eq for TimeWindow {}

impl Hash for TimeWindow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let start = self.start.to_bits() as i64;
        let end = self.end.to_bits() as i64;

        start.hash(state);
        end.hash(state);
    }
}
