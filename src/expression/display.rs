use std::fmt;

use crate::expression::ast::{Equation, Expression, Operand};

fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Add(_, _) | Expression::Sub(_, _) => 1,
        Expression::Mul(_, _) | Expression::Div(_, _) => 2,
        Expression::Neg(_) => 3,
        Expression::Operand(_) => 5,
    }
}

fn write_with_parens(f: &mut fmt::Formatter, expr: &Expression, need_parens: bool) -> fmt::Result {
    if need_parens {
        write!(f, "(")?;
        fmt_expression(f, expr)?;
        write!(f, ")")
    } else {
        fmt_expression(f, expr)
    }
}

// The right operand is parenthesized at equal precedence too, so the printed
// text parses back into the same tree even under integer division.
fn write_binary(
    f: &mut fmt::Formatter,
    own: u8,
    symbol: &str,
    l: &Expression,
    r: &Expression,
) -> fmt::Result {
    write_with_parens(f, l, precedence(l) < own)?;
    write!(f, " {} ", symbol)?;
    write_with_parens(f, r, precedence(r) <= own)
}

fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
    match expr {
        Expression::Operand(operand) => write!(f, "{}", operand),
        Expression::Add(l, r) => write_binary(f, 1, "+", l, r),
        Expression::Sub(l, r) => write_binary(f, 1, "-", l, r),
        Expression::Mul(l, r) => write_binary(f, 2, "*", l, r),
        Expression::Div(l, r) => write_binary(f, 2, "/", l, r),
        Expression::Neg(e) => {
            let need = !matches!(e.as_ref(), Expression::Operand(_));
            write!(f, "-")?;
            write_with_parens(f, e, need)
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Word(word) => write!(f, "{}", word.text),
            Operand::Numeral(digits) => write!(f, "{}", digits),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_expression(f, self)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} == {}", self.left, self.right)
    }
}
