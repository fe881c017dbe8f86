use std::fmt;

use crate::assignment::Assignment;
use crate::formula::LetterSet;

/// A satisfying assignment together with the letters it maps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    letters: LetterSet,
    assignment: Assignment,
}

impl Solution {
    pub(crate) fn new(letters: LetterSet, assignment: Assignment) -> Self {
        Self {
            letters,
            assignment,
        }
    }

    pub fn letters(&self) -> &LetterSet {
        &self.letters
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn digit_for(&self, letter: char) -> Option<u8> {
        self.letters
            .position(letter)
            .and_then(|slot| self.assignment.digit(slot))
    }

    /// Letter/digit pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.letters
            .iter()
            .zip(self.assignment.digits().iter().copied())
    }

    pub fn to_pairs(&self) -> Vec<(char, u8)> {
        self.iter().collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (letter, digit)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", letter, digit)?;
        }
        Ok(())
    }
}
