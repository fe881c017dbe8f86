// Digits in the order candidates draw them: 1 through 9, then 0
pub const DIGIT_ALPHABET: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];
pub const MAX_LETTERS: usize = DIGIT_ALPHABET.len();
