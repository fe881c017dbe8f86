//! Built-in puzzle texts and the provider seam used by front ends.
//!
//! How a front end picks a puzzle (random, by index, in turn) is its own
//! business; the solver only ever sees the formula string.

/// The built-in puzzles, all free of literal digits
pub const BUILTIN_PUZZLES: [&str; 15] = [
    "NUM + BER = PLAY",
    "SEND + MORE = MONEY",
    "X / X = X",
    "TWO + TWO = FOUR",
    "WRONG + WRONG = RIGHT",
    "ALPHABET + LETTERS = SCRABBLE",
    "POTATO + TOMATO = PUMPKIN",
    "WASH + YOUR = HANDS",
    "DOUBLE + DOUBLE + TOIL = TROUBLE",
    "NORTH / SOUTH = EAST / WEST",
    "DO + YOU + FEEL = LUCKY",
    "NOW + WE + KNOW + THE = TRUTH",
    "I + GUESS + THE + TRUTH = HURTS",
    "HAWAII + IDAHO + IOWA + OHIO = STATES",
    "ZEROES + ONES = BINARY",
];

/// Source of formula strings
pub trait PuzzleProvider {
    /// The next puzzle to present, or `None` when the source is empty
    fn next_puzzle(&mut self) -> Option<String>;
}

/// A fixed list of puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    puzzles: Vec<String>,
}

impl Catalog {
    pub fn new(puzzles: Vec<String>) -> Self {
        Self { puzzles }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_PUZZLES.iter().map(|p| p.to_string()).collect())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.puzzles.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.puzzles.iter().map(String::as_str)
    }

    /// Provider that hands out this catalog's puzzles in order, wrapping
    /// around at the end
    pub fn cycle(self, start: usize) -> CatalogCycle {
        CatalogCycle {
            catalog: self,
            next: start,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Clone)]
pub struct CatalogCycle {
    catalog: Catalog,
    next: usize,
}

impl PuzzleProvider for CatalogCycle {
    fn next_puzzle(&mut self) -> Option<String> {
        if self.catalog.is_empty() {
            return None;
        }
        let index = self.next % self.catalog.len();
        self.next = index + 1;
        self.catalog.get(index).map(str::to_string)
    }
}

/// Provider for one caller-supplied formula
#[derive(Debug, Clone)]
pub struct FixedPuzzle(Option<String>);

impl FixedPuzzle {
    pub fn new(formula: impl Into<String>) -> Self {
        Self(Some(formula.into()))
    }
}

impl PuzzleProvider for FixedPuzzle {
    fn next_puzzle(&mut self) -> Option<String> {
        self.0.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Formula;

    #[test]
    fn test_builtin_puzzles_are_well_formed() {
        for puzzle in Catalog::builtin().iter() {
            let formula = Formula::parse(puzzle);
            assert!(formula.is_ok(), "{} rejected: {:?}", puzzle, formula.err());
        }
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.get(1), Some("SEND + MORE = MONEY"));
        assert_eq!(catalog.get(15), None);
    }

    #[test]
    fn test_cycle_wraps_around() {
        let catalog = Catalog::new(vec!["A = A".to_string(), "B = B".to_string()]);
        let mut provider = catalog.cycle(1);
        assert_eq!(provider.next_puzzle().as_deref(), Some("B = B"));
        assert_eq!(provider.next_puzzle().as_deref(), Some("A = A"));
        assert_eq!(provider.next_puzzle().as_deref(), Some("B = B"));

        let mut empty = Catalog::new(Vec::new()).cycle(0);
        assert_eq!(empty.next_puzzle(), None);
    }

    #[test]
    fn test_fixed_puzzle_yields_once() {
        let mut provider = FixedPuzzle::new("X / X = X");
        assert_eq!(provider.next_puzzle().as_deref(), Some("X / X = X"));
        assert_eq!(provider.next_puzzle(), None);
    }
}
