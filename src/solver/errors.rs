use thiserror::Error;

use crate::formula::FormulaError;

/// Errors surfaced by a solve request.
///
/// Per-candidate problems (leading zeros, failed equality, arithmetic
/// faults) never show up here; they only move the search along.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid formula: {0}")]
    Formula(#[from] FormulaError),
    #[error("No digit assignment satisfies the formula")]
    NoSolutionFound,
    #[error("Search budget exceeded after {examined} candidates")]
    SearchBudgetExceeded { examined: u64 },
}

impl SolverError {
    /// True when the formula itself was rejected, as opposed to a valid
    /// formula with no solution within the search
    pub fn is_input_error(&self) -> bool {
        matches!(self, SolverError::Formula(_))
    }
}
