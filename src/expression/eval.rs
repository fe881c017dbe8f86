use log::debug;

use crate::expression::ast::{Equation, Expression, Operand};
use crate::expression::errors::ArithmeticFault;
use crate::expression::value::Rational;

/// How `/` treats a quotient that is not a whole number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivisionMode {
    /// Quotients are exact fractions, so `1 / 2 == 2 / 4` holds
    #[default]
    Exact,
    /// A non-integer quotient is an `InexactDivision` fault
    Integer,
}

impl Operand {
    /// Numeric value under `digits`, indexed by letter slot
    ///
    /// # Errors
    ///
    /// `Overflow` if the number does not fit in 128 bits, `UnassignedLetter`
    /// if a word refers to a slot beyond `digits`.
    pub fn value(&self, digits: &[u8]) -> Result<i128, ArithmeticFault> {
        match self {
            Operand::Word(word) => word.slots.iter().try_fold(0_i128, |acc, &slot| {
                let digit = digits
                    .get(slot)
                    .ok_or(ArithmeticFault::UnassignedLetter { slot })?;
                push_digit(acc, *digit)
            }),
            Operand::Numeral(text) => text
                .bytes()
                .try_fold(0_i128, |acc, b| push_digit(acc, b.wrapping_sub(b'0'))),
        }
    }

    /// A multi-character operand must not start with 0. A lone `0` is fine.
    pub fn has_leading_zero(&self, digits: &[u8]) -> bool {
        match self {
            Operand::Word(word) => {
                word.slots.len() > 1
                    && word
                        .slots
                        .first()
                        .and_then(|&slot| digits.get(slot))
                        .is_some_and(|&d| d == 0)
            }
            Operand::Numeral(text) => text.len() > 1 && text.starts_with('0'),
        }
    }
}

#[inline]
fn push_digit(acc: i128, digit: u8) -> Result<i128, ArithmeticFault> {
    acc.checked_mul(10)
        .and_then(|v| v.checked_add(i128::from(digit)))
        .ok_or(ArithmeticFault::Overflow)
}

impl Expression {
    /// # Errors
    ///
    /// Returns a fault when attempting:
    /// - Division by zero
    /// - A non-integer quotient under `DivisionMode::Integer`
    /// - Arithmetic beyond 128-bit range
    pub fn evaluate(&self, digits: &[u8], mode: DivisionMode) -> Result<Rational, ArithmeticFault> {
        match self {
            Expression::Operand(operand) => operand.value(digits).map(Rational::integer),
            Expression::Add(l, r) => {
                let left = l.evaluate(digits, mode)?;
                let right = r.evaluate(digits, mode)?;
                left.checked_add(right)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate(digits, mode)?;
                let right = r.evaluate(digits, mode)?;
                left.checked_sub(right)
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate(digits, mode)?;
                let right = r.evaluate(digits, mode)?;
                left.checked_mul(right)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate(digits, mode)?;
                let right = r.evaluate(digits, mode)?;
                let quotient = left.checked_div(right)?;
                if mode == DivisionMode::Integer && !quotient.is_integer() {
                    debug!("Inexact integer division: {} / {}", left, right);
                    return Err(ArithmeticFault::InexactDivision);
                }
                Ok(quotient)
            }
            Expression::Neg(e) => e.evaluate(digits, mode)?.checked_neg(),
        }
    }
}

impl Equation {
    /// True if any multi-character operand starts with 0 under `digits`
    pub fn has_leading_zero(&self, digits: &[u8]) -> bool {
        let mut found = false;
        self.for_each_operand(&mut |operand| {
            found = found || operand.has_leading_zero(digits);
        });
        found
    }

    /// Evaluate both sides and compare them exactly.
    ///
    /// # Errors
    ///
    /// Propagates the first fault met on either side.
    pub fn holds(&self, digits: &[u8], mode: DivisionMode) -> Result<bool, ArithmeticFault> {
        let left = self.left.evaluate(digits, mode)?;
        let right = self.right.evaluate(digits, mode)?;
        Ok(left == right)
    }
}
