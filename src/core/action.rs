//! Discrete user actions accepted by the state machine.

use super::state::AngleMode;
use serde::{Deserialize, Serialize};

/// A single user action.
///
/// The set is closed: the transition function matches on every variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Enter a token (digit, operator, glyph or function prefix such as `sin(`)
    Append(String),
    /// Reset the buffer and label
    Clear,
    /// Remove the last character of the buffer
    Delete,
    /// Evaluate the buffer
    Calculate,
    /// Switch the angle convention, re-evaluating a finalized expression
    SetAngleMode(AngleMode),
    /// Show or hide scientific tokens
    SetScientific(bool),
    /// Replace the buffer with the result of a history entry
    RecallHistory(usize),
    /// Forget all history entries
    ClearHistory,
}

impl Action {
    /// Convenience constructor for `Append`.
    pub fn append(token: impl Into<String>) -> Self {
        Self::Append(token.into())
    }

    /// Variant name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Append(_) => "Append",
            Self::Clear => "Clear",
            Self::Delete => "Delete",
            Self::Calculate => "Calculate",
            Self::SetAngleMode(_) => "SetAngleMode",
            Self::SetScientific(_) => "SetScientific",
            Self::RecallHistory(_) => "RecallHistory",
            Self::ClearHistory => "ClearHistory",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_builds_owned_token() {
        assert_eq!(Action::append("7"), Action::Append("7".to_string()));
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Action::Calculate.name(), "Calculate");
        assert_eq!(Action::SetAngleMode(AngleMode::Radians).name(), "SetAngleMode");
        assert_eq!(Action::RecallHistory(3).name(), "RecallHistory");
    }

    #[test]
    fn action_serializes_correctly() {
        let action = Action::SetAngleMode(AngleMode::Radians);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
