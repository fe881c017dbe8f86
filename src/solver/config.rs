use std::time::Duration;

use crate::expression::DivisionMode;
use crate::solver::constants::PARALLEL_THRESHOLD;

/// How the candidate space is walked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// One pass in lexicographic order. Always returns the first solution
    /// in that order.
    #[default]
    Sequential,
    /// Contiguous rank chunks searched on the rayon pool. Returns *a*
    /// solution when one exists, not necessarily the lexicographic first.
    Parallel,
    /// Parallel from `PARALLEL_THRESHOLD` letters up, sequential below
    Auto,
}

impl SearchStrategy {
    pub fn is_parallel_for(&self, letter_count: usize) -> bool {
        match self {
            SearchStrategy::Sequential => false,
            SearchStrategy::Parallel => true,
            SearchStrategy::Auto => letter_count >= PARALLEL_THRESHOLD,
        }
    }
}

/// Limits on one search; `None` means unlimited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBudget {
    /// At most this many candidates are evaluated
    pub max_candidates: Option<u64>,
    /// Wall-clock limit measured from the start of the run
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_candidates(mut self, max_candidates: u64) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_candidates.is_none() && self.time_limit.is_none()
    }
}

/// Configuration for a solver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub strategy: SearchStrategy,
    pub budget: SearchBudget,
    pub division_mode: DivisionMode,
}

impl SolverConfig {
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_division_mode(mut self, division_mode: DivisionMode) -> Self {
        self.division_mode = division_mode;
        self
    }
}
