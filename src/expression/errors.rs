use thiserror::Error;

/// Errors raised while reading text against the equation grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("Unexpected '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("Letters are not allowed here: '{word}' at position {position}")]
    LettersNotAllowed { word: String, position: usize },
    #[error("Expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("Unknown letter '{letter}'")]
    UnknownLetter { letter: char },
}

/// Arithmetic failures for a single candidate. These never abort a search.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticFault {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division does not produce an integer")]
    InexactDivision,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Letter slot {slot} has no digit assigned")]
    UnassignedLetter { slot: usize },
}
