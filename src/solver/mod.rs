pub mod constants;
mod config;
mod core;
mod errors;
mod search;
mod solution;

pub use self::core::{AlphameticSolver, SearchReport, SearchRun, SearchState};
pub use config::{SearchBudget, SearchStrategy, SolverConfig};
pub use errors::SolverError;
pub use solution::Solution;

#[cfg(test)]
mod tests;
