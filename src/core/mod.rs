//! Core calculator data model.
//!
//! This module contains the pure values the engine operates on:
//! - `CalculatorState`, the single state value read by the presentation layer
//! - `Action`, the closed set of user actions
//! - `HistoryLog`, the bounded record of past calculations
//!
//! Nothing in this module evaluates expressions or performs I/O.

mod action;
mod error;
mod history;
mod state;

pub use action::Action;
pub use error::InvariantError;
pub use history::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use state::{AngleMode, CalculatorState, Phase, ERROR_LITERAL, LABEL_MARKER, ZERO};
