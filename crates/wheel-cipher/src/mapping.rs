//! Alphabet mapping table
//!
//! The two rows printed under the wheel: the plain alphabet, and the
//! letter each one becomes under the current shift and mode.

use serde::Serialize;
use std::fmt;

use wheel_core::{LetterCase, LetterIndex, Mode, Shift, ALPHABET, ALPHABET_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlphabetMapping {
    pub shift: Shift,
    pub mode: Mode,
    shifted: [char; ALPHABET_LEN],
}

impl AlphabetMapping {
    pub fn new(shift: Shift, mode: Mode) -> Self {
        let mut shifted = ALPHABET;
        for index in LetterIndex::all() {
            shifted[index.as_usize()] = mode.apply(index, shift).letter();
        }
        Self { shift, mode, shifted }
    }

    /// Plain row, A to Z
    pub fn original(&self) -> &[char; ALPHABET_LEN] {
        &ALPHABET
    }

    /// Row of substituted letters, aligned with [`Self::original`]
    pub fn shifted(&self) -> &[char; ALPHABET_LEN] {
        &self.shifted
    }

    /// Letter that `c` becomes, in the same case, if it is a letter at all
    pub fn lookup(&self, c: char) -> Option<char> {
        LetterIndex::from_letter(c).map(|i| LetterCase::of(c).apply(self.shifted[i.as_usize()]))
    }

    pub fn label(&self) -> &'static str {
        match self.mode {
            Mode::Encrypt => "Encrypted:",
            Mode::Decrypt => "Decrypted:",
        }
    }

    /// Pairs like `A → D` for the first `n` letters
    pub fn examples(&self, n: usize) -> Vec<String> {
        ALPHABET
            .iter()
            .zip(self.shifted.iter())
            .take(n)
            .map(|(from, to)| format!("{from} → {to}"))
            .collect()
    }
}

impl fmt::Display for AlphabetMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |letters: &[char]| {
            letters
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        writeln!(f, "{:<11}{}", "Original:", row(&ALPHABET))?;
        write!(f, "{:<11}{}", self.label(), row(&self.shifted))
    }
}
