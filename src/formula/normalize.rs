use log::{debug, warn};

use crate::assignment::constants::MAX_LETTERS;
use crate::expression::{Equation, TokenKind, parse_tokens, tokenize};
use crate::formula::errors::FormulaError;
use crate::formula::letters::LetterSet;

/// Validated form of a raw formula
#[derive(Debug, Clone)]
pub(crate) struct Normalized {
    pub text: String,
    pub letters: LetterSet,
    pub equation: Equation,
}

/// # Errors
///
/// Checks run in this order, the first failure wins:
/// - a character outside `A-Z 0-9 + - * / ( ) =` and whitespace
/// - a literal digit run
/// - zero or several equality signs
/// - no letters at all
/// - more than ten distinct letters
/// - any other violation of the equation grammar
pub(crate) fn normalize(raw: &str) -> Result<Normalized, FormulaError> {
    debug!("Normalizing formula: '{}'", raw);

    let tokens = tokenize(raw).inspect_err(|e| warn!("Rejecting formula '{}': {}", raw, e))?;

    if let Some(literal) = tokens.iter().find_map(|t| match &t.kind {
        TokenKind::Number(digits) => Some(digits.clone()),
        _ => None,
    }) {
        warn!("Formula '{}' contains literal digits '{}'", raw, literal);
        return Err(FormulaError::UnsupportedLiteralDigits { literal });
    }

    let equalities = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Equals)
        .count();
    match equalities {
        0 => return Err(FormulaError::malformed("missing '='")),
        1 => {}
        n => {
            return Err(FormulaError::malformed(format!(
                "expected exactly one '=', found {}",
                n
            )));
        }
    }

    let letters = LetterSet::from_text(raw);
    if letters.is_empty() {
        return Err(FormulaError::malformed("no letters"));
    }
    if letters.len() > MAX_LETTERS {
        warn!(
            "Formula '{}' has {} distinct letters, no assignment can exist",
            raw,
            letters.len()
        );
        return Err(FormulaError::TooManyLetters {
            count: letters.len(),
        });
    }

    let equation = parse_tokens(&tokens, Some(letters.as_slice()))?;
    let text = equation.to_string();
    debug!("Normalized '{}' to '{}' over letters {}", raw, text, letters);

    Ok(Normalized {
        text,
        letters,
        equation,
    })
}
