//! Cryptarix - A library for solving alphametic puzzles
//!
//! An alphametic (cryptarithm) is an equation such as `SEND + MORE = MONEY`
//! where every letter stands for a distinct decimal digit. This library
//! normalizes such formulas, walks the digit assignments in a fixed order and
//! checks each one with its own small arithmetic grammar.

pub mod assignment;
pub mod evaluator;
pub mod expression;
pub mod formula;
pub mod puzzles;
pub mod solver;

// Re-export the main public API
pub use assignment::{Assignment, Assignments, permutation_count};
pub use evaluator::{Candidate, Verdict, evaluate, evaluate_candidate};
pub use expression::{ArithmeticFault, DivisionMode, ExpressionError};
pub use formula::{Formula, FormulaError, LetterSet};
pub use puzzles::{Catalog, PuzzleProvider};
pub use solver::{
    AlphameticSolver, SearchBudget, SearchReport, SearchState, SearchStrategy, Solution,
    SolverConfig, SolverError,
};

/// Solve an alphametic formula with the default, sequential solver
///
/// Assignments are tried in lexicographic order over the digits
/// `1 2 3 4 5 6 7 8 9 0`, so the same formula always yields the same
/// solution.
///
/// # Arguments
///
/// * `formula` - Uppercase words joined by `+ - * /`, parentheses and one `=`
///
/// # Errors
///
/// This function will return an error if:
/// * The formula is malformed, contains literal digits, or has more than
///   ten distinct letters
/// * No assignment satisfies the formula
///
/// # Examples
///
/// ```
/// use cryptarix::solve;
///
/// let solution = solve("SEND + MORE = MONEY").unwrap();
/// assert_eq!(solution.digit_for('M'), Some(1));
/// assert_eq!(solution.digit_for('Y'), Some(2));
/// ```
pub fn solve(formula: &str) -> Result<Solution, SolverError> {
    AlphameticSolver::default().solve(formula)
}
