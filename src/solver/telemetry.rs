//! This module provides a simple way to log pipeline progress.

use std::sync::Arc;

/// A logger type which is called with information about the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Specifies a telemetry mode.
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Stage summaries are written through the given logger.
    OnlyLogging {
        /// A logger used to write stage summaries.
        logger: InfoLogger,
    },
}

/// Writes pipeline stage information using the configured mode.
pub struct Telemetry {
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode }
    }

    /// Logs a stage summary message.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger } = &self.mode {
            (logger)(message)
        }
    }
}
