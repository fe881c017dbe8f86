use std::fmt;

use super::constants::MAX_LETTERS;

/// Injective mapping from letter slots to digits.
///
/// Slot `i` is the `i`-th letter of the formula's letter set. The value is
/// small and `Copy`; one is produced per enumeration step and dropped after
/// it is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment {
    digits: [u8; MAX_LETTERS],
    len: u8,
}

impl Assignment {
    pub(crate) fn from_array(digits: [u8; MAX_LETTERS], len: usize) -> Self {
        Self {
            digits,
            len: len.min(MAX_LETTERS) as u8,
        }
    }

    /// Build an assignment from per-slot digits.
    ///
    /// Returns `None` if there are more than ten slots, a digit above 9, or a
    /// digit used twice.
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        if digits.len() > MAX_LETTERS {
            return None;
        }

        let mut seen = 0_u16;
        let mut array = [0_u8; MAX_LETTERS];
        for (slot, &digit) in array.iter_mut().zip(digits) {
            if digit > 9 || seen & (1 << digit) != 0 {
                return None;
            }
            seen |= 1 << digit;
            *slot = digit;
        }

        Some(Self::from_array(array, digits.len()))
    }

    /// Digits indexed by letter slot
    pub fn digits(&self) -> &[u8] {
        self.digits.get(..usize::from(self.len)).unwrap_or_default()
    }

    pub fn digit(&self, slot: usize) -> Option<u8> {
        self.digits().get(slot).copied()
    }

    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
