//! Equation grammar: tree, reader, printer and exact evaluation

mod ast;
mod display;
mod errors;
mod eval;
mod parser;
mod value;

pub use ast::{Equation, Expression, Operand, Word};
pub use errors::{ArithmeticFault, ExpressionError};
pub use eval::DivisionMode;
pub use parser::{MAX_NESTING_DEPTH, Token, TokenKind, parse_equation, parse_tokens, tokenize};
pub use value::Rational;
