//! The fixed Latin alphabet and letter indices

use serde::{Deserialize, Serialize};

/// Number of letters on each ring
pub const ALPHABET_LEN: usize = 26;

/// Alphabet in ring order, index 0 at the top of the wheel
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Position of a letter in the alphabet, always in `0..26`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct LetterIndex(u8);

impl LetterIndex {
    /// Wrap any integer onto the alphabet (one full revolution per 26)
    pub fn new(value: i64) -> Self {
        Self(value.rem_euclid(ALPHABET_LEN as i64) as u8)
    }

    /// Index of an ASCII letter, compared case-insensitively.
    ///
    /// Anything outside `A-Z`/`a-z` has no index, including non-ASCII
    /// letters whose Unicode uppercase is ASCII (`ſ`, the Kelvin sign).
    pub fn from_letter(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Every index in ring order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN as u8).map(Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Uppercase letter at this index
    pub fn letter(self) -> char {
        ALPHABET[self.as_usize()]
    }
}

impl From<i64> for LetterIndex {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<LetterIndex> for u8 {
    fn from(index: LetterIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for LetterIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Case of a source letter, captured before lookup and reapplied after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    Upper,
    Lower,
}

impl LetterCase {
    pub fn of(c: char) -> Self {
        if c.is_ascii_lowercase() {
            LetterCase::Lower
        } else {
            LetterCase::Upper
        }
    }

    pub fn apply(self, c: char) -> char {
        match self {
            LetterCase::Upper => c.to_ascii_uppercase(),
            LetterCase::Lower => c.to_ascii_lowercase(),
        }
    }
}
