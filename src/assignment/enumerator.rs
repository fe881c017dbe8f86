use log::debug;
use std::iter::FusedIterator;
use std::ops::Range;

use super::constants::MAX_LETTERS;
use super::core::Assignment;
use super::state::{PermutationCursor, falling_factorial};

/// Number of assignments for `k` letters: 10! / (10 - k)!
pub fn permutation_count(k: usize) -> u64 {
    if k > MAX_LETTERS {
        return 0;
    }
    falling_factorial(MAX_LETTERS as u64, k as u64)
}

/// Lazy, finite sequence of assignments for `k` letters.
///
/// Assignments come in lexicographic order over the digit alphabet
/// `1 2 3 4 5 6 7 8 9 0`, slot by slot. Only the current cursor is kept, so
/// memory stays O(k) and dropping the iterator early costs nothing.
#[derive(Debug, Clone)]
pub struct Assignments {
    cursor: PermutationCursor,
    remaining: u64,
}

impl Assignments {
    /// Every assignment for `k` letters
    pub fn new(k: usize) -> Self {
        Self::range(k, 0..permutation_count(k))
    }

    /// The assignments whose lexicographic rank falls in `ranks`; the bounds
    /// are clamped to the total count.
    pub fn range(k: usize, ranks: Range<u64>) -> Self {
        let total = permutation_count(k);
        let start = ranks.start.min(total);
        let end = ranks.end.min(total).max(start);

        let cursor = if start == 0 {
            PermutationCursor::first(k)
        } else {
            PermutationCursor::from_rank(k, start)
        };

        debug!(
            "Enumerating assignments for {} letters, ranks {}..{} of {}",
            k, start, end, total
        );

        Self {
            cursor,
            remaining: end - start,
        }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let assignment = self.cursor.assignment();
        self.remaining -= 1;
        if self.remaining > 0 && !self.cursor.advance() {
            self.remaining = 0;
        }
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

impl FusedIterator for Assignments {}
