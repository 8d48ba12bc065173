//! Calculator state and its observable phase.
//!
//! `CalculatorState` is the single value the presentation layer reads after
//! every transition. Its fields are only writable from inside the crate so the
//! buffer invariants cannot be broken from outside the transition function.

use super::error::InvariantError;
use super::history::HistoryLog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Buffer content shown after a reset.
pub const ZERO: &str = "0";

/// Buffer content shown while the last evaluation failed.
pub const ERROR_LITERAL: &str = "Error";

/// Marker appended to the expression label once an expression is evaluated.
pub const LABEL_MARKER: &str = " =";

/// Angle convention used by the trigonometric functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Degrees => "deg",
            Self::Radians => "rad",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse position of the calculator in its interaction cycle.
///
/// Derived from the state, never stored. Used for logging and by hosts that
/// want to style the display without inspecting individual fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Accumulating user input.
    Entry,
    /// The buffer shows the result of a finalized expression.
    Evaluated,
    /// The last evaluation failed.
    Error,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Evaluated => "Evaluated",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Complete calculator state.
///
/// # Example
///
/// ```rust
/// use calc_engine::core::{AngleMode, CalculatorState};
///
/// let state = CalculatorState::new(10);
/// assert_eq!(state.display(), "0");
/// assert_eq!(state.expression_label(), "");
/// assert_eq!(state.angle_mode(), AngleMode::Degrees);
/// assert!(!state.is_error());
/// assert!(state.history().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) expression_label: String,
    pub(crate) scientific: bool,
    pub(crate) angle_mode: AngleMode,
    pub(crate) error: bool,
    pub(crate) history: HistoryLog,
}

impl CalculatorState {
    /// Fresh state with a history bounded to `history_capacity` entries.
    pub fn new(history_capacity: usize) -> Self {
        Self {
            display: ZERO.to_string(),
            expression_label: String::new(),
            scientific: false,
            angle_mode: AngleMode::default(),
            error: false,
            history: HistoryLog::with_capacity(history_capacity),
        }
    }

    /// Current entry or result.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Last finalized expression followed by `" ="`, or empty.
    pub fn expression_label(&self) -> &str {
        &self.expression_label
    }

    pub fn is_scientific(&self) -> bool {
        self.scientific
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Expression preceding the label marker, if a calculation was finalized.
    pub fn evaluated_expression(&self) -> Option<&str> {
        self.expression_label.strip_suffix(LABEL_MARKER)
    }

    pub fn phase(&self) -> Phase {
        if self.error {
            Phase::Error
        } else if self.evaluated_expression().is_some() {
            Phase::Evaluated
        } else {
            Phase::Entry
        }
    }

    /// Check the invariants every reachable state satisfies.
    ///
    /// Reports the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.display.is_empty() {
            return Err(InvariantError::EmptyDisplay);
        }
        if self.display == ERROR_LITERAL && !self.error {
            return Err(InvariantError::UnflaggedErrorLiteral);
        }
        if self.error && self.display != ERROR_LITERAL {
            return Err(InvariantError::FlaggedWithoutLiteral {
                display: self.display.clone(),
            });
        }
        if self.history.len() > self.history.capacity() {
            return Err(InvariantError::HistoryOverCapacity {
                len: self.history.len(),
                capacity: self.history.capacity(),
            });
        }
        Ok(())
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(super::history::DEFAULT_HISTORY_CAPACITY)
    }
}
