use std::fmt;

use crate::expression::errors::ArithmeticFault;

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Exact rational number, always kept in lowest terms with a positive
/// denominator. Every operation is checked; overflow becomes a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: i128,
    denom: i128,
}

impl Rational {
    pub const ZERO: Rational = Rational { numer: 0, denom: 1 };

    pub const fn integer(value: i128) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }

    /// # Errors
    ///
    /// `DivisionByZero` for a zero denominator, `Overflow` if the sign cannot
    /// be normalized.
    pub fn new(numer: i128, denom: i128) -> Result<Self, ArithmeticFault> {
        if denom == 0 {
            return Err(ArithmeticFault::DivisionByZero);
        }
        if numer == 0 {
            return Ok(Self::ZERO);
        }

        let (numer, denom) = if denom < 0 {
            (
                numer.checked_neg().ok_or(ArithmeticFault::Overflow)?,
                denom.checked_neg().ok_or(ArithmeticFault::Overflow)?,
            )
        } else {
            (numer, denom)
        };

        // g divides the positive denominator, so it fits in i128
        let g = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i128;
        Ok(Self {
            numer: numer / g,
            denom: denom / g,
        })
    }

    pub fn numer(&self) -> i128 {
        self.numer
    }

    pub fn denom(&self) -> i128 {
        self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, ArithmeticFault> {
        if self.denom == 1 && rhs.denom == 1 {
            return self
                .numer
                .checked_add(rhs.numer)
                .map(Self::integer)
                .ok_or(ArithmeticFault::Overflow);
        }

        let g = gcd(self.denom.unsigned_abs(), rhs.denom.unsigned_abs()) as i128;
        let left = self
            .numer
            .checked_mul(rhs.denom / g)
            .ok_or(ArithmeticFault::Overflow)?;
        let right = rhs
            .numer
            .checked_mul(self.denom / g)
            .ok_or(ArithmeticFault::Overflow)?;
        let numer = left.checked_add(right).ok_or(ArithmeticFault::Overflow)?;
        let denom = (self.denom / g)
            .checked_mul(rhs.denom)
            .ok_or(ArithmeticFault::Overflow)?;
        Self::new(numer, denom)
    }

    pub fn checked_neg(self) -> Result<Self, ArithmeticFault> {
        Ok(Self {
            numer: self.numer.checked_neg().ok_or(ArithmeticFault::Overflow)?,
            denom: self.denom,
        })
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, ArithmeticFault> {
        self.checked_add(rhs.checked_neg()?)
    }

    pub fn checked_mul(self, rhs: Self) -> Result<Self, ArithmeticFault> {
        // Cross-reduce first to keep intermediates small
        let g1 = gcd(self.numer.unsigned_abs(), rhs.denom.unsigned_abs()).max(1) as i128;
        let g2 = gcd(rhs.numer.unsigned_abs(), self.denom.unsigned_abs()).max(1) as i128;
        let numer = (self.numer / g1)
            .checked_mul(rhs.numer / g2)
            .ok_or(ArithmeticFault::Overflow)?;
        let denom = (self.denom / g2)
            .checked_mul(rhs.denom / g1)
            .ok_or(ArithmeticFault::Overflow)?;
        Self::new(numer, denom)
    }

    pub fn checked_div(self, rhs: Self) -> Result<Self, ArithmeticFault> {
        if rhs.is_zero() {
            return Err(ArithmeticFault::DivisionByZero);
        }
        let reciprocal = Self::new(rhs.denom, rhs.numer)?;
        self.checked_mul(reciprocal)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reduces_and_normalizes_sign() {
        assert_eq!(Rational::new(4, -8), Ok(Rational { numer: -1, denom: 2 }));
        assert_eq!(Rational::new(0, -5), Ok(Rational::ZERO));
        assert_eq!(Rational::new(3, 0), Err(ArithmeticFault::DivisionByZero));
    }

    #[test]
    fn test_fraction_arithmetic_is_exact() {
        let third = Rational::new(1, 3).unwrap_or(Rational::ZERO);
        let sum = third
            .checked_add(third)
            .and_then(|s| s.checked_add(third));
        assert_eq!(sum, Ok(Rational::integer(1)));

        let half = Rational::new(2, 4).unwrap_or(Rational::ZERO);
        assert_eq!(
            Rational::integer(1).checked_div(Rational::integer(2)),
            Ok(half)
        );
        assert!(!half.is_integer());
        assert_eq!(half.to_string(), "1/2");
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = Rational::integer(i128::MAX);
        assert_eq!(
            big.checked_add(Rational::integer(1)),
            Err(ArithmeticFault::Overflow)
        );
        assert_eq!(
            big.checked_mul(Rational::integer(2)),
            Err(ArithmeticFault::Overflow)
        );
        assert_eq!(
            Rational::integer(i128::MIN).checked_neg(),
            Err(ArithmeticFault::Overflow)
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Rational::integer(7).checked_div(Rational::ZERO),
            Err(ArithmeticFault::DivisionByZero)
        );
    }
}
