//! Shift amount and substitution direction

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::alphabet::{LetterIndex, ALPHABET_LEN};
use crate::Error;

const MODULUS: i64 = ALPHABET_LEN as i64;

/// Rotation between the outer and inner ring, always in `0..26`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Shift(u8);

impl Shift {
    pub const ZERO: Shift = Shift(0);

    /// Normalize any integer: `((value % 26) + 26) % 26`
    pub fn new(value: i64) -> Self {
        Self(value.rem_euclid(MODULUS) as u8)
    }

    /// Read a shift typed by a person.
    ///
    /// Leading whitespace and an optional sign are accepted, then digits up
    /// to the first non-digit (`"7px"` is 7, `"3.9"` is 3). Input with no
    /// leading digits is 0. Digits are reduced mod 26 as they are read, so
    /// arbitrarily long numbers never overflow.
    pub fn parse(input: &str) -> Self {
        let s = input.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let magnitude = digits
            .bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0i64, |acc, d| (acc * 10 + i64::from(d - b'0')) % MODULUS);

        if negative {
            Self::new(-magnitude)
        } else {
            Self::new(magnitude)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The shift that undoes this one in the same mode
    pub fn complement(self) -> Self {
        Self::new(MODULUS - i64::from(self.0))
    }
}

impl From<i64> for Shift {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Shift> for u8 {
    fn from(shift: Shift) -> Self {
        shift.0
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of substitution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Add the shift
    #[default]
    Encrypt,
    /// Subtract the shift
    Decrypt,
}

impl Mode {
    /// Shift one alphabet index in this direction
    pub fn apply(self, index: LetterIndex, shift: Shift) -> LetterIndex {
        let i = i64::from(index.value());
        let s = i64::from(shift.value());
        match self {
            Mode::Encrypt => LetterIndex::new((i + s) % MODULUS),
            Mode::Decrypt => LetterIndex::new((i - s + MODULUS) % MODULUS),
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Mode::Encrypt => Mode::Decrypt,
            Mode::Decrypt => Mode::Encrypt,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Mode::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Mode::Decrypt),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
