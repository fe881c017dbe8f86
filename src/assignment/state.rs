use super::constants::{DIGIT_ALPHABET, MAX_LETTERS};
use super::core::Assignment;

/// Position of one k-permutation of the digit alphabet.
///
/// `indices[i]` is the alphabet index chosen for slot `i`; `used` has bit `j`
/// set when alphabet index `j` is taken by some slot.
#[derive(Debug, Clone)]
pub(crate) struct PermutationCursor {
    indices: [u8; MAX_LETTERS],
    used: u16,
    k: usize,
}

impl PermutationCursor {
    /// The lexicographically first permutation: 0, 1, .., k-1
    pub(crate) fn first(k: usize) -> Self {
        let k = k.min(MAX_LETTERS);
        let mut indices = [0_u8; MAX_LETTERS];
        for (i, index) in indices.iter_mut().enumerate().take(k) {
            *index = i as u8;
        }
        Self {
            indices,
            used: (1_u16 << k) - 1,
            k,
        }
    }

    /// Decode a lexicographic rank, choosing per slot the `rank / block`-th
    /// free alphabet index where `block` counts the completions of the
    /// remaining slots.
    pub(crate) fn from_rank(k: usize, mut rank: u64) -> Self {
        let k = k.min(MAX_LETTERS);
        let n = MAX_LETTERS as u64;
        let mut indices = [0_u8; MAX_LETTERS];
        let mut used = 0_u16;

        for (i, index) in indices.iter_mut().enumerate().take(k) {
            let remaining = (k - i - 1) as u64;
            let block = falling_factorial(n - i as u64 - 1, remaining).max(1);
            let mut skip = rank / block;
            rank %= block;

            for candidate in 0..MAX_LETTERS as u8 {
                if used & (1 << candidate) != 0 {
                    continue;
                }
                if skip == 0 {
                    *index = candidate;
                    used |= 1 << candidate;
                    break;
                }
                skip -= 1;
            }
        }

        Self { indices, used, k }
    }

    pub(crate) fn assignment(&self) -> Assignment {
        let mut digits = [0_u8; MAX_LETTERS];
        for (digit, &index) in digits.iter_mut().zip(&self.indices).take(self.k) {
            *digit = DIGIT_ALPHABET
                .get(usize::from(index))
                .copied()
                .unwrap_or_default();
        }
        Assignment::from_array(digits, self.k)
    }

    /// Step to the next permutation in lexicographic order. Returns false
    /// once the last permutation has been passed.
    pub(crate) fn advance(&mut self) -> bool {
        for i in (0..self.k).rev() {
            let current = self.indices[i];
            self.used &= !(1 << current);

            let next_free =
                (current + 1..MAX_LETTERS as u8).find(|&j| self.used & (1 << j) == 0);
            if let Some(next) = next_free {
                self.indices[i] = next;
                self.used |= 1 << next;

                // Refill the tail with the smallest free indices, ascending
                let mut free = 0_u8;
                for index in self.indices.iter_mut().take(self.k).skip(i + 1) {
                    while self.used & (1 << free) != 0 {
                        free += 1;
                    }
                    *index = free;
                    self.used |= 1 << free;
                }
                return true;
            }
        }
        false
    }
}

/// n * (n - 1) * .. * (n - r + 1); zero when r > n
pub fn falling_factorial(n: u64, r: u64) -> u64 {
    if r > n {
        return 0;
    }
    (n - r + 1..=n).product()
}
