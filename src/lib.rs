//! Calc Engine: a pure calculator state machine
//!
//! The engine accepts discrete user actions (entering tokens, deleting,
//! clearing, evaluating, switching angle mode) and maintains the display
//! state a calculator front end renders. Transitions are pure functions of
//! the current state and the action; rendering, themes and raw input
//! handling belong to the host.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState`, the display buffer, label, modes and history
//! - **Actions**: the closed `Action` enum, applied one at a time
//! - **Evaluation**: angle-aware expression evaluation with result snapping
//! - **History**: bounded newest-first log of successful calculations
//!
//! # Example
//!
//! ```rust
//! use calc_engine::core::{Action, AngleMode};
//! use calc_engine::input::actions_for_text;
//! use calc_engine::machine::CalculatorStateMachine;
//!
//! let mut machine = CalculatorStateMachine::default();
//! machine.apply_all(actions_for_text("12*(3+4)="));
//!
//! let state = machine.state();
//! assert_eq!(state.display(), "84");
//! assert_eq!(state.expression_label(), "12×(3+4) =");
//! assert_eq!(state.history().len(), 1);
//!
//! machine.apply(Action::SetAngleMode(AngleMode::Radians));
//! assert_eq!(machine.state().display(), "84");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod eval;
pub mod input;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder, EngineConfig};
pub use self::core::{
    Action, AngleMode, CalculatorState, HistoryEntry, HistoryLog, InvariantError,
};
pub use eval::{evaluate, EvaluationError};
pub use machine::{apply, CalculatorStateMachine};
