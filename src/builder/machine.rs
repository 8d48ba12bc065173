//! Builder for constructing calculator engines.

use crate::builder::config::EngineConfig;
use crate::builder::error::BuildError;
use crate::core::{AngleMode, CalculatorState};
use crate::eval::MAX_PRECISION;
use crate::machine::CalculatorStateMachine;

/// Builder for constructing a calculator engine with a fluent API.
///
/// # Example
///
/// ```rust
/// use calc_engine::builder::EngineBuilder;
/// use calc_engine::core::AngleMode;
///
/// let machine = EngineBuilder::new()
///     .history_capacity(5)
///     .precision(6)
///     .angle_mode(AngleMode::Radians)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state().angle_mode(), AngleMode::Radians);
/// assert_eq!(machine.state().history().capacity(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
    angle_mode: AngleMode,
    scientific: bool,
}

impl EngineBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Maximum number of history entries (default 10).
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Decimal places kept in results (default 10).
    pub fn precision(mut self, precision: usize) -> Self {
        self.config.precision = precision;
        self
    }

    /// Snap distance for 0 and ±1 (default 1e-12).
    pub fn snap_tolerance(mut self, tolerance: f64) -> Self {
        self.config.snap_tolerance = tolerance;
        self
    }

    /// Initial angle mode (default degrees).
    pub fn angle_mode(mut self, mode: AngleMode) -> Self {
        self.angle_mode = mode;
        self
    }

    /// Start with scientific tokens shown.
    pub fn scientific(mut self, enabled: bool) -> Self {
        self.scientific = enabled;
        self
    }

    /// Validate the settings without building a machine.
    pub fn config(&self) -> Result<EngineConfig, BuildError> {
        let config = self.config;

        if config.history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }
        if config.precision > MAX_PRECISION {
            return Err(BuildError::PrecisionTooLarge {
                requested: config.precision,
                max: MAX_PRECISION,
            });
        }
        if !config.snap_tolerance.is_finite() || config.snap_tolerance < 0.0 {
            return Err(BuildError::InvalidSnapTolerance(config.snap_tolerance));
        }

        Ok(config)
    }

    /// Build the engine.
    /// Returns an error if a setting is out of range.
    pub fn build(self) -> Result<CalculatorStateMachine, BuildError> {
        let config = self.config()?;

        let mut state = CalculatorState::new(config.history_capacity);
        state.angle_mode = self.angle_mode;
        state.scientific = self.scientific;

        Ok(CalculatorStateMachine::with_state(state, config))
    }
}
