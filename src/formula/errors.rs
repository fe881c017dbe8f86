use thiserror::Error;

use crate::expression::ExpressionError;

/// Reasons a formula is rejected before any search starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Malformed formula: {reason}")]
    MalformedFormula { reason: String },
    #[error("Literal digits are not supported: '{literal}'")]
    UnsupportedLiteralDigits { literal: String },
    #[error("Too many distinct letters: {count} (at most 10 digits exist)")]
    TooManyLetters { count: usize },
}

impl FormulaError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        FormulaError::MalformedFormula {
            reason: reason.into(),
        }
    }
}

impl From<ExpressionError> for FormulaError {
    fn from(err: ExpressionError) -> Self {
        match err {
            ExpressionError::UnexpectedCharacter { ch, position } => FormulaError::malformed(
                format!("unsupported character '{}' at position {}", ch, position),
            ),
            other => FormulaError::malformed(other.to_string()),
        }
    }
}
