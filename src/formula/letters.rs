use std::fmt;

/// Distinct letters of a formula in order of first appearance.
///
/// The position of a letter here is its slot in every assignment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterSet {
    letters: Vec<char>,
}

impl LetterSet {
    /// Collect the distinct uppercase ASCII letters of `text`
    pub fn from_text(text: &str) -> Self {
        let mut letters = Vec::new();
        for ch in text.chars().filter(char::is_ascii_uppercase) {
            if !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        Self { letters }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    pub fn get(&self, slot: usize) -> Option<char> {
        self.letters.get(slot).copied()
    }

    /// Slot of `letter`, if it occurs in the formula
    pub fn position(&self, letter: char) -> Option<usize> {
        self.letters.iter().position(|&l| l == letter)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
