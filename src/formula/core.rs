use std::fmt;
use std::str::FromStr;

use crate::assignment::Assignment;
use crate::expression::{Equation, Operand};
use crate::formula::errors::FormulaError;
use crate::formula::letters::LetterSet;
use crate::formula::normalize::normalize;

/// A parsed, validated alphametic equation.
///
/// Built once per query and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Formula {
    original: String,
    normalized: String,
    letters: LetterSet,
    equation: Equation,
    leading_slots: Vec<usize>,
}

impl Formula {
    /// Parse and validate raw puzzle text such as `SEND + MORE = MONEY`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedFormula`, `UnsupportedLiteralDigits` or
    /// `TooManyLetters`.
    pub fn parse(text: &str) -> Result<Self, FormulaError> {
        let normalized = normalize(text)?;

        let mut leading_slots = Vec::new();
        normalized.equation.for_each_operand(&mut |operand| {
            if let Operand::Word(word) = operand
                && word.len() > 1
                && let Some(&first) = word.slots().first()
            {
                leading_slots.push(first);
            }
        });
        leading_slots.sort_unstable();
        leading_slots.dedup();

        Ok(Self {
            original: text.to_string(),
            normalized: normalized.text,
            letters: normalized.letters,
            equation: normalized.equation,
            leading_slots,
        })
    }

    /// Text exactly as given
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Canonical text with `==` for equality; parsing it again yields the
    /// same normalized text
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn letters(&self) -> &LetterSet {
        &self.letters
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    /// Letters that begin a word of two or more letters and so cannot be 0
    pub fn leading_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.leading_slots
            .iter()
            .filter_map(|&slot| self.letters.get(slot))
    }

    /// True if `assignment` gives 0 to a letter that starts a multi-letter word
    pub fn has_leading_zero(&self, assignment: &Assignment) -> bool {
        self.leading_slots
            .iter()
            .any(|&slot| assignment.digit(slot) == Some(0))
    }

    /// Turn a letter-to-digit mapping into an assignment for this formula.
    ///
    /// Returns `None` unless the pairs cover every letter exactly once with
    /// distinct digits 0-9 and name no letter outside the formula.
    pub fn assignment_from_pairs(&self, pairs: &[(char, u8)]) -> Option<Assignment> {
        if pairs.len() != self.letters.len() {
            return None;
        }

        let mut digits: Vec<Option<u8>> = vec![None; self.letters.len()];
        for &(letter, digit) in pairs {
            let slot = digits.get_mut(self.letters.position(letter)?)?;
            if slot.is_some() {
                return None;
            }
            *slot = Some(digit);
        }

        let digits: Option<Vec<u8>> = digits.into_iter().collect();
        Assignment::from_digits(&digits?)
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}
