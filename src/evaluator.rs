//! Verdicts for single candidate assignments.
//!
//! Everything here goes through the crate's own equation grammar; candidate
//! text is never handed to a general-purpose interpreter.

use std::fmt;

use crate::assignment::Assignment;
use crate::expression::{
    ArithmeticFault, DivisionMode, Equation, ExpressionError, Operand, parse_equation,
};
use crate::formula::Formula;

/// Outcome of checking one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    InvalidLeadingZero,
    InvalidArithmetic,
    ArithmeticFault(ArithmeticFault),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    fn from_equation(equation: &Equation, digits: &[u8], mode: DivisionMode) -> Self {
        if equation.has_leading_zero(digits) {
            return Verdict::InvalidLeadingZero;
        }
        match equation.holds(digits, mode) {
            Ok(true) => Verdict::Valid,
            Ok(false) => Verdict::InvalidArithmetic,
            Err(fault) => Verdict::ArithmeticFault(fault),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::InvalidLeadingZero => write!(f, "multi-digit number starts with 0"),
            Verdict::InvalidArithmetic => write!(f, "equation does not hold"),
            Verdict::ArithmeticFault(fault) => write!(f, "arithmetic fault: {}", fault),
        }
    }
}

/// Check `assignment` against `formula`.
///
/// The leading-zero test uses the formula's precomputed leading letters, so
/// most rejected candidates never reach arithmetic.
pub fn evaluate(formula: &Formula, assignment: &Assignment, mode: DivisionMode) -> Verdict {
    if formula.has_leading_zero(assignment) {
        return Verdict::InvalidLeadingZero;
    }
    match formula.equation().holds(assignment.digits(), mode) {
        Ok(true) => Verdict::Valid,
        Ok(false) => Verdict::InvalidArithmetic,
        Err(fault) => Verdict::ArithmeticFault(fault),
    }
}

/// Check numeral-only candidate text such as `9567 + 1085 == 10652`.
///
/// # Errors
///
/// Returns an error if the text is not a numeric equation; letters are
/// rejected.
pub fn evaluate_candidate(text: &str, mode: DivisionMode) -> Result<Verdict, ExpressionError> {
    let equation = parse_equation(text, None)?;
    Ok(Verdict::from_equation(&equation, &[], mode))
}

/// A formula with every word replaced by the digits of one assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    equation: Equation,
}

impl Candidate {
    pub fn substitute(formula: &Formula, assignment: &Assignment) -> Self {
        Self {
            equation: formula.equation().substitute(assignment.digits()),
        }
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    /// True once every word has been replaced by a numeral
    pub fn is_complete(&self) -> bool {
        let mut complete = true;
        self.equation.for_each_operand(&mut |operand| {
            complete = complete && matches!(operand, Operand::Numeral(_));
        });
        complete
    }

    pub fn verdict(&self, mode: DivisionMode) -> Verdict {
        Verdict::from_equation(&self.equation, &[], mode)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.equation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(text: &str) -> Formula {
        match Formula::parse(text) {
            Ok(f) => f,
            Err(e) => panic!("failed to parse '{}': {}", text, e),
        }
    }

    fn assignment(digits: &[u8]) -> Assignment {
        match Assignment::from_digits(digits) {
            Some(a) => a,
            None => panic!("invalid digits {:?}", digits),
        }
    }

    #[test]
    fn test_valid_send_more_money() {
        let f = formula("SEND + MORE = MONEY");
        let a = assignment(&[9, 5, 6, 7, 1, 0, 8, 2]);
        assert_eq!(evaluate(&f, &a, DivisionMode::Exact), Verdict::Valid);

        let candidate = Candidate::substitute(&f, &a);
        assert!(candidate.is_complete());
        assert_eq!(candidate.to_string(), "9567 + 1085 == 10652");
        assert_eq!(candidate.verdict(DivisionMode::Exact), Verdict::Valid);
    }

    #[test]
    fn test_wrong_sum_is_invalid_arithmetic() {
        let f = formula("SEND + MORE = MONEY");
        let a = assignment(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            evaluate(&f, &a, DivisionMode::Exact),
            Verdict::InvalidArithmetic
        );
    }

    #[test]
    fn test_leading_zero_checked_before_arithmetic() {
        let f = formula("AB + AB = BA");
        let a = assignment(&[0, 5]);
        assert_eq!(
            evaluate(&f, &a, DivisionMode::Exact),
            Verdict::InvalidLeadingZero
        );
    }

    #[test]
    fn test_single_zero_operand_is_allowed() {
        let f = formula("A + A = A");
        assert_eq!(
            evaluate(&f, &assignment(&[0]), DivisionMode::Exact),
            Verdict::Valid
        );
        assert_eq!(
            evaluate(&f, &assignment(&[1]), DivisionMode::Exact),
            Verdict::InvalidArithmetic
        );
    }

    #[test]
    fn test_division_by_zero_is_fault_verdict() {
        let f = formula("X / X = X");
        assert_eq!(
            evaluate(&f, &assignment(&[0]), DivisionMode::Exact),
            Verdict::ArithmeticFault(ArithmeticFault::DivisionByZero)
        );
        assert_eq!(
            evaluate(&f, &assignment(&[1]), DivisionMode::Exact),
            Verdict::Valid
        );
    }

    #[test]
    fn test_integer_mode_faults_on_fraction() {
        let f = formula("A / B = C / D");
        // 1/2 == 3/6
        let a = assignment(&[1, 2, 3, 6]);
        assert_eq!(evaluate(&f, &a, DivisionMode::Exact), Verdict::Valid);
        assert_eq!(
            evaluate(&f, &a, DivisionMode::Integer),
            Verdict::ArithmeticFault(ArithmeticFault::InexactDivision)
        );
    }

    #[test]
    fn test_evaluate_candidate_text() {
        assert_eq!(
            evaluate_candidate("734 + 734 == 1468", DivisionMode::Exact),
            Ok(Verdict::Valid)
        );
        assert_eq!(
            evaluate_candidate("034 + 734 = 768", DivisionMode::Exact),
            Ok(Verdict::InvalidLeadingZero)
        );
        assert_eq!(
            evaluate_candidate("1 + 1 = 3", DivisionMode::Exact),
            Ok(Verdict::InvalidArithmetic)
        );
        assert_eq!(
            evaluate_candidate("1 / 0 = 3", DivisionMode::Exact),
            Ok(Verdict::ArithmeticFault(ArithmeticFault::DivisionByZero))
        );
    }

    #[test]
    fn test_evaluate_candidate_refuses_anything_else() {
        assert!(evaluate_candidate("__import__('os') == 1", DivisionMode::Exact).is_err());
        assert!(evaluate_candidate("A + 1 == 2", DivisionMode::Exact).is_err());
        assert!(evaluate_candidate("2 ** 3 == 8", DivisionMode::Exact).is_err());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Valid.to_string(), "valid");
        assert_eq!(
            Verdict::ArithmeticFault(ArithmeticFault::DivisionByZero).to_string(),
            "arithmetic fault: Division by zero"
        );
    }
}
