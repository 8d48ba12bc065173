//! Calculator state machine that owns the session state.

use super::transition::apply;
use crate::builder::EngineConfig;
use crate::core::{Action, CalculatorState};
use crate::eval::ExpressionEvaluator;

/// Owns the calculator state and applies actions to it one at a time.
///
/// The machine does no locking of its own; hosts that share it between
/// threads must serialize calls to [`CalculatorStateMachine::apply`].
///
/// # Example
///
/// ```rust
/// use calc_engine::core::{Action, AngleMode};
/// use calc_engine::machine::CalculatorStateMachine;
///
/// let mut machine = CalculatorStateMachine::default();
/// for token in ["s", "i", "n", "(", "9", "0", ")"] {
///     machine.apply(Action::append(token));
/// }
/// machine.apply(Action::Calculate);
/// assert_eq!(machine.state().display(), "1");
///
/// machine.apply(Action::SetAngleMode(AngleMode::Radians));
/// assert_eq!(machine.state().display(), "0.8939966636");
/// ```
#[derive(Clone, Debug)]
pub struct CalculatorStateMachine {
    state: CalculatorState,
    config: EngineConfig,
    evaluator: ExpressionEvaluator,
}

impl Default for CalculatorStateMachine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CalculatorStateMachine {
    /// Create a machine in the startup state.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_state(CalculatorState::new(config.history_capacity), config)
    }

    /// Create a machine around an existing state.
    pub fn with_state(state: CalculatorState, config: EngineConfig) -> Self {
        Self {
            state,
            evaluator: config.evaluator(),
            config,
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Configuration (pure)
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &ExpressionEvaluator {
        &self.evaluator
    }

    /// Apply one action and return the resulting state.
    pub fn apply(&mut self, action: Action) -> &CalculatorState {
        let name = action.name();
        let state = std::mem::take(&mut self.state);
        self.state = apply(state, action, &self.evaluator);

        tracing::debug!(
            action = name,
            phase = self.state.phase().name(),
            display = %self.state.display(),
            "applied action"
        );
        &self.state
    }

    /// Apply actions in order, returning the final state.
    pub fn apply_all<I>(&mut self, actions: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.apply(action);
        }
        &self.state
    }

    /// Flip between degrees and radians.
    pub fn toggle_angle_mode(&mut self) -> &CalculatorState {
        let next = self.state.angle_mode().toggled();
        self.apply(Action::SetAngleMode(next))
    }

    /// Give up the state, ending the session.
    pub fn into_state(self) -> CalculatorState {
        self.state
    }
}
