//! Optional automatic recovery from the error state.
//!
//! The core machine leaves the error literal on screen until the user acts.
//! Hosts that prefer the display to fall back to `0` after a pause poll an
//! [`ErrorRevert`] from their event loop; it never runs on its own.

use super::engine::CalculatorStateMachine;
use crate::core::{Action, CalculatorState};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Delay before the error literal is replaced by `0`.
pub const DEFAULT_ERROR_REVERT_DELAY: Duration = Duration::from_millis(1500);

/// Poll-driven timer that clears the error state after a delay.
///
/// # Example
///
/// ```rust
/// use calc_engine::core::Action;
/// use calc_engine::machine::{CalculatorStateMachine, ErrorRevert};
/// use chrono::{Duration, Utc};
///
/// let mut machine = CalculatorStateMachine::default();
/// let mut revert = ErrorRevert::default();
/// let start = Utc::now();
///
/// machine.apply_all([Action::append("("), Action::Calculate]);
/// revert.observe(machine.state(), start);
///
/// assert!(!revert.poll(&mut machine, start + Duration::milliseconds(500)));
/// assert!(revert.poll(&mut machine, start + Duration::milliseconds(1500)));
/// assert_eq!(machine.state().display(), "0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorRevert {
    delay: Duration,
    error_since: Option<DateTime<Utc>>,
}

impl Default for ErrorRevert {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_REVERT_DELAY)
    }
}

impl ErrorRevert {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            error_since: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether an error is currently being timed.
    pub fn is_armed(&self) -> bool {
        self.error_since.is_some()
    }

    /// Record the state after an action.
    ///
    /// Arms on entering the error state; an already armed timer keeps its
    /// original start. Disarms when the state is no longer in error.
    pub fn observe(&mut self, state: &CalculatorState, now: DateTime<Utc>) {
        if state.is_error() {
            self.error_since.get_or_insert(now);
        } else {
            self.error_since = None;
        }
    }

    /// Time spent in the error state as of `now`.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.error_since.map(|since| {
            now.signed_duration_since(since)
                .to_std()
                .unwrap_or(Duration::ZERO)
        })
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.elapsed(now).is_some_and(|elapsed| elapsed >= self.delay)
    }

    /// Clear the error if the delay has passed.
    ///
    /// Applies `Delete`, which turns the error state into `0` without
    /// touching the expression label. Returns whether the machine changed.
    pub fn poll(&mut self, machine: &mut CalculatorStateMachine, now: DateTime<Utc>) -> bool {
        if !machine.state().is_error() {
            self.error_since = None;
            return false;
        }
        if !self.is_due(now) {
            return false;
        }

        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "reverting error display");
        machine.apply(Action::Delete);
        self.error_since = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn errored_machine() -> CalculatorStateMachine {
        let mut machine = CalculatorStateMachine::default();
        machine.apply_all([Action::append("2"), Action::append("+"), Action::Calculate]);
        assert!(machine.state().is_error());
        machine
    }

    #[test]
    fn arms_only_in_error() {
        let machine = CalculatorStateMachine::default();
        let mut revert = ErrorRevert::default();
        revert.observe(machine.state(), Utc::now());
        assert!(!revert.is_armed());

        let machine = errored_machine();
        revert.observe(machine.state(), Utc::now());
        assert!(revert.is_armed());
    }

    #[test]
    fn keeps_original_start_while_error_persists() {
        let machine = errored_machine();
        let mut revert = ErrorRevert::default();
        let start = Utc::now();

        revert.observe(machine.state(), start);
        revert.observe(machine.state(), start + ChronoDuration::milliseconds(1000));

        assert_eq!(
            revert.elapsed(start + ChronoDuration::milliseconds(1200)),
            Some(Duration::from_millis(1200))
        );
    }

    #[test]
    fn poll_before_delay_does_nothing() {
        let mut machine = errored_machine();
        let mut revert = ErrorRevert::default();
        let start = Utc::now();
        revert.observe(machine.state(), start);

        assert!(!revert.poll(&mut machine, start + ChronoDuration::milliseconds(1499)));
        assert!(machine.state().is_error());
    }

    #[test]
    fn poll_after_delay_clears_error_and_keeps_label() {
        let mut machine = CalculatorStateMachine::default();
        machine.apply_all([Action::append("1"), Action::Calculate]);
        machine.apply_all([Action::append("*"), Action::Calculate]);
        assert!(machine.state().is_error());

        let mut revert = ErrorRevert::new(Duration::from_millis(100));
        let start = Utc::now();
        revert.observe(machine.state(), start);

        assert!(revert.poll(&mut machine, start + ChronoDuration::milliseconds(100)));
        assert_eq!(machine.state().display(), "0");
        assert!(!machine.state().is_error());
        assert_eq!(machine.state().expression_label(), "1 =");
        assert!(!revert.is_armed());
    }

    #[test]
    fn user_recovery_disarms() {
        let mut machine = errored_machine();
        let mut revert = ErrorRevert::default();
        let start = Utc::now();
        revert.observe(machine.state(), start);

        machine.apply(Action::append("3"));
        assert!(!revert.poll(&mut machine, start + ChronoDuration::seconds(5)));
        assert_eq!(machine.state().display(), "3");
        assert!(!revert.is_armed());
    }
}
