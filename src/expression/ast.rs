/// A run of letters standing for one multi-digit number.
///
/// `slots` holds, for every letter of the run, its position in the formula's
/// letter set, so a word is valued straight from an assignment's digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub(crate) text: String,
    pub(crate) slots: Vec<usize>,
}

impl Word {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Leaf of an expression tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Word(Word),
    /// Decimal digits exactly as written, leading zeros included
    Numeral(String),
}

/// Arithmetic expression over words and numerals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Operand(Operand),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Neg(Box<Expression>),
}

/// Two expressions joined by the single equality comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub left: Expression,
    pub right: Expression,
}

impl Expression {
    /// Visit every leaf, left to right
    pub fn for_each_operand<'a>(&'a self, visit: &mut impl FnMut(&'a Operand)) {
        match self {
            Expression::Operand(operand) => visit(operand),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                l.for_each_operand(visit);
                r.for_each_operand(visit);
            }
            Expression::Neg(e) => e.for_each_operand(visit),
        }
    }

    /// Copy of this tree with every word replaced by the numeral its slots
    /// spell under `digits`. Words with an unassigned slot are kept as-is.
    pub fn substitute(&self, digits: &[u8]) -> Expression {
        match self {
            Expression::Operand(Operand::Word(word)) => {
                let numeral: Option<String> = word
                    .slots
                    .iter()
                    .map(|&slot| digits.get(slot).map(|d| char::from(b'0' + d)))
                    .collect();
                match numeral {
                    Some(numeral) => Expression::Operand(Operand::Numeral(numeral)),
                    None => self.clone(),
                }
            }
            Expression::Operand(Operand::Numeral(_)) => self.clone(),
            Expression::Add(l, r) => {
                Expression::Add(Box::new(l.substitute(digits)), Box::new(r.substitute(digits)))
            }
            Expression::Sub(l, r) => {
                Expression::Sub(Box::new(l.substitute(digits)), Box::new(r.substitute(digits)))
            }
            Expression::Mul(l, r) => {
                Expression::Mul(Box::new(l.substitute(digits)), Box::new(r.substitute(digits)))
            }
            Expression::Div(l, r) => {
                Expression::Div(Box::new(l.substitute(digits)), Box::new(r.substitute(digits)))
            }
            Expression::Neg(e) => Expression::Neg(Box::new(e.substitute(digits))),
        }
    }
}

impl Equation {
    pub fn for_each_operand<'a>(&'a self, visit: &mut impl FnMut(&'a Operand)) {
        self.left.for_each_operand(visit);
        self.right.for_each_operand(visit);
    }

    pub fn substitute(&self, digits: &[u8]) -> Equation {
        Equation {
            left: self.left.substitute(digits),
            right: self.right.substitute(digits),
        }
    }
}
