//! Pure transition function.
//!
//! `apply` consumes a state and an action and returns the next state. The
//! only collaborator is the evaluator, which is itself pure.

use crate::core::{
    Action, AngleMode, CalculatorState, HistoryEntry, ERROR_LITERAL, LABEL_MARKER, ZERO,
};
use crate::eval::ExpressionEvaluator;

/// Compute the state that follows `action`.
///
/// # Example
///
/// ```rust
/// use calc_engine::core::{Action, CalculatorState};
/// use calc_engine::eval::ExpressionEvaluator;
/// use calc_engine::machine::apply;
///
/// let evaluator = ExpressionEvaluator::default();
/// let state = CalculatorState::default();
/// let state = apply(state, Action::append("2"), &evaluator);
/// let state = apply(state, Action::append("+"), &evaluator);
/// let state = apply(state, Action::append("2"), &evaluator);
/// let state = apply(state, Action::Calculate, &evaluator);
///
/// assert_eq!(state.display(), "4");
/// assert_eq!(state.expression_label(), "2+2 =");
/// assert_eq!(state.history().len(), 1);
/// ```
pub fn apply(
    mut state: CalculatorState,
    action: Action,
    evaluator: &ExpressionEvaluator,
) -> CalculatorState {
    match action {
        Action::Append(token) => append(&mut state, token),
        Action::Clear => clear(&mut state),
        Action::Delete => delete(&mut state),
        Action::Calculate => calculate(&mut state, evaluator),
        Action::SetAngleMode(mode) => set_angle_mode(&mut state, mode, evaluator),
        Action::SetScientific(enabled) => state.scientific = enabled,
        Action::RecallHistory(index) => recall(&mut state, index),
        Action::ClearHistory => state.history.clear(),
    }
    state
}

fn append(state: &mut CalculatorState, token: String) {
    // Empty tokens would leave an empty buffer behind
    if token.is_empty() {
        return;
    }
    if state.display == ZERO || state.error {
        state.display = token;
    } else {
        state.display.push_str(&token);
    }
    // The error literal is only ever shown in the error state
    state.error = state.display == ERROR_LITERAL;
}

fn clear(state: &mut CalculatorState) {
    state.display = ZERO.to_string();
    state.expression_label.clear();
    state.error = false;
}

fn delete(state: &mut CalculatorState) {
    if !state.error && state.display != ERROR_LITERAL && state.display.chars().count() > 1 {
        state.display.pop();
        state.error = state.display == ERROR_LITERAL;
    } else {
        state.display = ZERO.to_string();
        state.error = false;
    }
}

fn calculate(state: &mut CalculatorState, evaluator: &ExpressionEvaluator) {
    match evaluator.evaluate(&state.display, state.angle_mode) {
        Ok(result) => {
            let expression = std::mem::replace(&mut state.display, result);
            state.expression_label = format!("{expression}{LABEL_MARKER}");
            state
                .history
                .push(HistoryEntry::new(expression, state.display.clone()));
            state.error = false;
        }
        Err(_) => {
            state.error = true;
            state.display = ERROR_LITERAL.to_string();
        }
    }
}

fn set_angle_mode(state: &mut CalculatorState, mode: AngleMode, evaluator: &ExpressionEvaluator) {
    state.angle_mode = mode;
    if state.error {
        return;
    }
    let Some(expression) = state.evaluated_expression() else {
        return;
    };
    // A failed re-evaluation keeps the previous result on screen
    if let Ok(result) = evaluator.evaluate(expression, mode) {
        state.display = result;
    }
}

fn recall(state: &mut CalculatorState, index: usize) {
    if let Some(result) = state.history.select(index) {
        state.display = result.to_string();
        state.error = false;
    }
}
