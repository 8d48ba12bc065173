//! Violations of the calculator state invariants.

use thiserror::Error;

/// A state that no sequence of actions can produce.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Display buffer is empty")]
    EmptyDisplay,

    #[error("Display shows the error literal without the error flag")]
    UnflaggedErrorLiteral,

    #[error("Error flag is set but the display shows {display:?}")]
    FlaggedWithoutLiteral { display: String },

    #[error("History holds {len} entries, capacity is {capacity}")]
    HistoryOverCapacity { len: usize, capacity: usize },
}
