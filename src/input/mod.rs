//! Input adapters that turn host events into actions.
//!
//! Neither adapter touches calculator state; both only produce `Action`
//! values for `CalculatorStateMachine::apply`.

pub mod keymap;
pub mod keypad;

pub use keymap::{action_for_key, actions_for_text, Key};
pub use keypad::{buttons_for, scientific_buttons, standard_buttons, Button, ButtonKind};
