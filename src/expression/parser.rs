//! Recursive-descent reader for the equation grammar:
//!
//! ```text
//! equation := expr '=' expr
//! expr     := term (('+' | '-') term)*
//! term     := unary (('*' | '/') unary)*
//! unary    := ('-' | '+') unary | primary
//! primary  := WORD | NUMBER | '(' expr ')'
//! ```
//!
//! `==` is read as the same equality token as `=`.

use log::debug;
use std::fmt;

use crate::expression::ast::{Equation, Expression, Operand, Word};
use crate::expression::errors::ExpressionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Word(String),
    Number(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Equals,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Word(w) => write!(f, "{}", w),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Equals => write!(f, "=="),
        }
    }
}

/// Split text into grammar tokens, skipping whitespace.
///
/// # Errors
///
/// Returns `UnexpectedCharacter` for anything outside `A-Z`, `0-9`,
/// `+ - * / ( ) =` and whitespace.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ExpressionError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(&b) = bytes.get(i) {
        let position = i;
        let kind = match b {
            b if b.is_ascii_whitespace() => {
                i += 1;
                continue;
            }
            b'A'..=b'Z' => {
                let run = run_length(bytes.get(i..).unwrap_or_default(), |c| {
                    c.is_ascii_uppercase()
                });
                i += run;
                TokenKind::Word(text.get(position..i).unwrap_or_default().to_string())
            }
            b'0'..=b'9' => {
                let run = run_length(bytes.get(i..).unwrap_or_default(), |c| c.is_ascii_digit());
                i += run;
                TokenKind::Number(text.get(position..i).unwrap_or_default().to_string())
            }
            b'=' => {
                i += if bytes.get(i + 1) == Some(&b'=') { 2 } else { 1 };
                TokenKind::Equals
            }
            _ => {
                i += 1;
                match b {
                    b'+' => TokenKind::Plus,
                    b'-' => TokenKind::Minus,
                    b'*' => TokenKind::Star,
                    b'/' => TokenKind::Slash,
                    b'(' => TokenKind::LParen,
                    b')' => TokenKind::RParen,
                    _ => {
                        let ch = text
                            .get(position..)
                            .and_then(|rest| rest.chars().next())
                            .unwrap_or('\u{FFFD}');
                        return Err(ExpressionError::UnexpectedCharacter { ch, position });
                    }
                }
            }
        };
        tokens.push(Token { kind, position });
    }

    Ok(tokens)
}

fn run_length(bytes: &[u8], accept: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&c| accept(c)).count()
}

/// Deepest nesting of parentheses and unary signs the parser will follow
pub const MAX_NESTING_DEPTH: usize = 64;

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    letters: Option<&'a [char]>,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ExpressionError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        Ok(())
    }

    fn unexpected(token: &Token) -> ExpressionError {
        ExpressionError::UnexpectedToken {
            token: token.kind.to_string(),
            position: token.position,
        }
    }

    fn equation(&mut self) -> Result<Equation, ExpressionError> {
        let left = self.expr()?;
        match self.advance() {
            Some(Token {
                kind: TokenKind::Equals,
                ..
            }) => {}
            Some(token) => return Err(Self::unexpected(token)),
            None => return Err(ExpressionError::UnexpectedEnd { expected: "'='" }),
        }
        let right = self.expr()?;
        if let Some(token) = self.advance() {
            return Err(Self::unexpected(token));
        }
        Ok(Equation { left, right })
    }

    fn expr(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.term()?;
        loop {
            match self.peek() {
                Some(TokenKind::Plus) => {
                    self.pos += 1;
                    left = Expression::Add(Box::new(left), Box::new(self.term()?));
                }
                Some(TokenKind::Minus) => {
                    self.pos += 1;
                    left = Expression::Sub(Box::new(left), Box::new(self.term()?));
                }
                _ => return Ok(left),
            }
        }
    }

    fn term(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.unary()?;
        loop {
            match self.peek() {
                Some(TokenKind::Star) => {
                    self.pos += 1;
                    left = Expression::Mul(Box::new(left), Box::new(self.unary()?));
                }
                Some(TokenKind::Slash) => {
                    self.pos += 1;
                    left = Expression::Div(Box::new(left), Box::new(self.unary()?));
                }
                _ => return Ok(left),
            }
        }
    }

    fn unary(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            Some(TokenKind::Minus) => {
                self.pos += 1;
                self.descend()?;
                let inner = self.unary()?;
                self.depth -= 1;
                Ok(Expression::Neg(Box::new(inner)))
            }
            Some(TokenKind::Plus) => {
                self.pos += 1;
                self.descend()?;
                let inner = self.unary()?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expression, ExpressionError> {
        let token = self.advance().ok_or(ExpressionError::UnexpectedEnd {
            expected: "an operand",
        })?;

        match &token.kind {
            TokenKind::Number(digits) => Ok(Expression::Operand(Operand::Numeral(digits.clone()))),
            TokenKind::Word(text) => self.word(text, token.position),
            TokenKind::LParen => {
                self.descend()?;
                let inner = self.expr()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(Self::unexpected(other)),
                    None => Err(ExpressionError::UnexpectedEnd { expected: "')'" }),
                }
            }
            _ => Err(Self::unexpected(token)),
        }
    }

    fn word(&self, text: &str, position: usize) -> Result<Expression, ExpressionError> {
        let letters = self.letters.ok_or_else(|| ExpressionError::LettersNotAllowed {
            word: text.to_string(),
            position,
        })?;

        let slots = text
            .chars()
            .map(|letter| {
                letters
                    .iter()
                    .position(|&l| l == letter)
                    .ok_or(ExpressionError::UnknownLetter { letter })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Expression::Operand(Operand::Word(Word {
            text: text.to_string(),
            slots,
        })))
    }
}

/// Parse an equation whose words are bound to positions in `letters`.
/// With `letters` set to `None`, only numerals are accepted.
///
/// # Errors
///
/// Returns an error for any text outside the equation grammar.
pub fn parse_equation(text: &str, letters: Option<&[char]>) -> Result<Equation, ExpressionError> {
    let tokens = tokenize(text)?;
    parse_tokens(&tokens, letters)
}

/// # Errors
///
/// Returns an error if the tokens do not form exactly one equation.
pub fn parse_tokens(tokens: &[Token], letters: Option<&[char]>) -> Result<Equation, ExpressionError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        letters,
    };
    let equation = parser.equation()?;
    debug!("Parsed equation: {}", equation);
    Ok(equation)
}
