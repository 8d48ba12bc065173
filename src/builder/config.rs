//! Engine configuration.

use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::eval::{ExpressionEvaluator, ResultFormatter, DEFAULT_PRECISION, DEFAULT_SNAP_TOLERANCE};
use serde::{Deserialize, Serialize};

/// Settings fixed for the lifetime of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of history entries kept
    pub history_capacity: usize,
    /// Decimal places kept in formatted results
    pub precision: usize,
    /// Distance within which results snap to 0, 1 or -1
    pub snap_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            precision: DEFAULT_PRECISION,
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
        }
    }
}

impl EngineConfig {
    pub fn formatter(&self) -> ResultFormatter {
        ResultFormatter::new(self.precision, self.snap_tolerance)
    }

    pub fn evaluator(&self) -> ExpressionEvaluator {
        ExpressionEvaluator::new(self.formatter())
    }
}
