//! Formula normalization: raw puzzle text to a validated equation

mod core;
mod errors;
mod letters;
mod normalize;

pub use self::core::Formula;
pub use errors::FormulaError;
pub use letters::LetterSet;
