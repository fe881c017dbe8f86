use log::{debug, info, warn};
use std::time::{Duration, Instant};

use crate::assignment::permutation_count;
use crate::formula::Formula;
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::search::{ChunkOutcome, SearchContext};
use crate::solver::solution::Solution;

/// Lifecycle of one search run.
///
/// `Created -> Normalizing -> Searching -> {Solved | Exhausted |
/// BudgetExceeded}`, or `Normalizing -> Rejected` for a bad formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Created,
    Normalizing,
    Searching,
    Solved,
    Exhausted,
    Rejected,
    BudgetExceeded,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchState::Solved
                | SearchState::Exhausted
                | SearchState::Rejected
                | SearchState::BudgetExceeded
        )
    }
}

/// Everything a finished run knows about itself
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: Result<Solution, SolverError>,
    pub state: SearchState,
    /// Candidates evaluated; zero when the formula was rejected
    pub examined: u64,
    pub elapsed: Duration,
    pub parallel: bool,
}

/// A single query. Consumed by `execute`, so a run never sees two formulas.
#[derive(Debug)]
pub struct SearchRun {
    config: SolverConfig,
    state: SearchState,
    started: Instant,
}

impl SearchRun {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            state: SearchState::Created,
            started: Instant::now(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    fn transition(&mut self, next: SearchState) {
        debug!("Search state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn finish(
        mut self,
        state: SearchState,
        outcome: Result<Solution, SolverError>,
        examined: u64,
        parallel: bool,
    ) -> SearchReport {
        self.transition(state);
        SearchReport {
            outcome,
            state: self.state,
            examined,
            elapsed: self.started.elapsed(),
            parallel,
        }
    }

    /// Normalize `raw`, then search it
    pub fn execute(mut self, raw: &str) -> SearchReport {
        self.started = Instant::now();
        self.transition(SearchState::Normalizing);

        match Formula::parse(raw) {
            Ok(formula) => self.search(&formula),
            Err(err) => {
                warn!("Formula '{}' rejected: {}", raw, err);
                self.finish(SearchState::Rejected, Err(err.into()), 0, false)
            }
        }
    }

    /// Search an already normalized formula
    pub fn execute_formula(mut self, formula: &Formula) -> SearchReport {
        self.started = Instant::now();
        self.transition(SearchState::Normalizing);
        self.search(formula)
    }

    fn search(mut self, formula: &Formula) -> SearchReport {
        self.transition(SearchState::Searching);

        let letter_count = formula.letters().len();
        let parallel = self.config.strategy.is_parallel_for(letter_count);
        info!(
            "Searching '{}': {} letters, {} candidates, {}",
            formula,
            letter_count,
            permutation_count(letter_count),
            if parallel { "parallel" } else { "sequential" }
        );

        let context = SearchContext::new(
            formula,
            self.config.division_mode,
            self.config.budget,
            self.started,
        );
        let outcome = if parallel {
            context.search_parallel()
        } else {
            context.search_sequential()
        };
        let examined = context.examined();

        match outcome {
            ChunkOutcome::Found(assignment) => {
                let solution = Solution::new(formula.letters().clone(), assignment);
                info!("Found {} after {} candidates", solution, examined);
                self.finish(SearchState::Solved, Ok(solution), examined, parallel)
            }
            ChunkOutcome::BudgetExceeded => {
                warn!("Search budget exceeded after {} candidates", examined);
                self.finish(
                    SearchState::BudgetExceeded,
                    Err(SolverError::SearchBudgetExceeded { examined }),
                    examined,
                    parallel,
                )
            }
            ChunkOutcome::Exhausted | ChunkOutcome::Cancelled => {
                info!("No solution among {} candidates", examined);
                self.finish(
                    SearchState::Exhausted,
                    Err(SolverError::NoSolutionFound),
                    examined,
                    parallel,
                )
            }
        }
    }
}

/// Solver for alphametic formulas. Holds only configuration, so one value
/// can serve any number of queries, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct AlphameticSolver {
    config: SolverConfig,
}

impl AlphameticSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the first assignment that makes `formula` true
    ///
    /// # Errors
    ///
    /// `Formula` for rejected input, `NoSolutionFound` when the search is
    /// exhausted, `SearchBudgetExceeded` when the budget runs out first.
    pub fn solve(&self, formula: &str) -> Result<Solution, SolverError> {
        self.search(formula).outcome
    }

    /// Like `solve`, keeping the run's statistics
    pub fn search(&self, formula: &str) -> SearchReport {
        SearchRun::new(self.config).execute(formula)
    }

    pub fn search_formula(&self, formula: &Formula) -> SearchReport {
        SearchRun::new(self.config).execute_formula(formula)
    }
}
