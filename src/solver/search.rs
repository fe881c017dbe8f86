use log::{debug, info};
use rayon::prelude::*;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use crate::assignment::{Assignment, Assignments, permutation_count};
use crate::evaluator::evaluate;
use crate::expression::DivisionMode;
use crate::formula::Formula;
use crate::solver::config::SearchBudget;
use crate::solver::constants::{BUDGET_CHECK_INTERVAL, CHUNKS_PER_THREAD};

/// How a search over some rank range ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChunkOutcome {
    Found(Assignment),
    Exhausted,
    BudgetExceeded,
    Cancelled,
}

/// State shared by every worker of one run
pub(crate) struct SearchContext<'a> {
    formula: &'a Formula,
    mode: DivisionMode,
    budget: SearchBudget,
    started: Instant,
    examined: AtomicU64,
    cancelled: AtomicBool,
    budget_hit: AtomicBool,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(
        formula: &'a Formula,
        mode: DivisionMode,
        budget: SearchBudget,
        started: Instant,
    ) -> Self {
        Self {
            formula,
            mode,
            budget,
            started,
            examined: AtomicU64::new(0),
            cancelled: AtomicBool::new(false),
            budget_hit: AtomicBool::new(false),
        }
    }

    /// Candidates evaluated so far across all workers
    pub(crate) fn examined(&self) -> u64 {
        self.examined.load(Ordering::Relaxed)
    }

    pub(crate) fn budget_hit(&self) -> bool {
        self.budget_hit.load(Ordering::Relaxed)
    }

    fn stop(&self, budget: bool) {
        if budget {
            self.budget_hit.store(true, Ordering::Relaxed);
        }
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Claim the right to evaluate one more candidate. `local` counts the
    /// candidates this worker has already seen.
    fn claim(&self, local: u64) -> bool {
        if let Some(limit) = self.budget.time_limit
            && local % BUDGET_CHECK_INTERVAL == 0
            && self.started.elapsed() >= limit
        {
            return false;
        }

        let claimed = self.examined.fetch_add(1, Ordering::Relaxed);
        if let Some(max) = self.budget.max_candidates
            && claimed >= max
        {
            self.examined.fetch_sub(1, Ordering::Relaxed);
            return false;
        }
        true
    }

    /// Walk the assignments ranked in `ranks`, stopping at the first valid
    /// one. The cancellation flag is read between candidates only.
    pub(crate) fn search_range(&self, ranks: Range<u64>) -> ChunkOutcome {
        let k = self.formula.letters().len();
        debug!("Searching ranks {}..{}", ranks.start, ranks.end);

        for (local, assignment) in (0_u64..).zip(Assignments::range(k, ranks)) {
            if self.cancelled.load(Ordering::Relaxed) {
                return ChunkOutcome::Cancelled;
            }
            if !self.claim(local) {
                self.stop(true);
                return ChunkOutcome::BudgetExceeded;
            }
            if evaluate(self.formula, &assignment, self.mode).is_valid() {
                self.stop(false);
                return ChunkOutcome::Found(assignment);
            }
        }
        ChunkOutcome::Exhausted
    }

    /// Single pass over the whole space in lexicographic order
    pub(crate) fn search_sequential(&self) -> ChunkOutcome {
        let total = permutation_count(self.formula.letters().len());
        self.search_range(0..total)
    }

    /// Split the space into contiguous chunks and race them on the rayon
    /// pool. The first worker to find a solution cancels the rest.
    pub(crate) fn search_parallel(&self) -> ChunkOutcome {
        let total = permutation_count(self.formula.letters().len());
        let chunk_target = (rayon::current_num_threads() * CHUNKS_PER_THREAD).max(1) as u64;
        let chunk_size = total.div_ceil(chunk_target).max(1);
        let chunks = total.div_ceil(chunk_size);

        info!(
            "Searching {} candidates in {} chunks of up to {}",
            total, chunks, chunk_size
        );

        let found = (0..chunks).into_par_iter().find_map_any(|chunk| {
            let start = chunk * chunk_size;
            let end = (start + chunk_size).min(total);
            match self.search_range(start..end) {
                ChunkOutcome::Found(assignment) => Some(assignment),
                _ => None,
            }
        });

        match found {
            Some(assignment) => ChunkOutcome::Found(assignment),
            None if self.budget_hit() => ChunkOutcome::BudgetExceeded,
            None => ChunkOutcome::Exhausted,
        }
    }
}
