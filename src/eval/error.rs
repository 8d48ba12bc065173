//! Evaluation error type.

use thiserror::Error;

/// The expression could not be evaluated.
///
/// Parse failures, unknown identifiers and evaluator failures all map to this
/// one error. `reason` is diagnostic text from the evaluator and is not meant
/// to be matched on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Cannot evaluate `{expression}`: {reason}")]
pub struct EvaluationError {
    pub expression: String,
    pub reason: String,
}

impl EvaluationError {
    pub fn new(expression: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            expression: expression.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_expression() {
        let err = EvaluationError::new("2+*", "unexpected token");
        assert_eq!(err.to_string(), "Cannot evaluate `2+*`: unexpected token");
    }
}
