//! Calculator state machine.
//!
//! - `transition`: the pure `apply(state, action)` function
//! - `engine`: the machine value owning the session state
//! - `revert`: optional timed recovery from the error state

mod engine;
mod revert;
mod transition;

pub use engine::CalculatorStateMachine;
pub use revert::{ErrorRevert, DEFAULT_ERROR_REVERT_DELAY};
pub use transition::apply;
