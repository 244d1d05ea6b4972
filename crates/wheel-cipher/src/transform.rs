//! Shift cipher
//!
//! Each letter moves `shift` places along the alphabet, forward to
//! encrypt and backward to decrypt, keeping its original case.

use wheel_core::{LetterCase, LetterIndex, Mode, Shift};

/// Shift a single character.
///
/// Characters outside `A-Z`/`a-z` come back unchanged.
pub fn transform_char(c: char, shift: Shift, mode: Mode) -> char {
    let Some(index) = LetterIndex::from_letter(c) else {
        return c;
    };
    let case = LetterCase::of(c);
    case.apply(mode.apply(index, shift).letter())
}

/// Shift every letter of `text`.
///
/// The output has exactly as many characters as the input.
pub fn transform(text: &str, shift: Shift, mode: Mode) -> String {
    tracing::trace!(len = text.len(), %shift, %mode, "transform");
    text.chars().map(|c| transform_char(c, shift, mode)).collect()
}

/// Same as [`transform`], taking the shift as typed (unparseable is 0)
pub fn transform_str(text: &str, shift: &str, mode: Mode) -> String {
    transform(text, Shift::parse(shift), mode)
}

pub fn encrypt(text: &str, shift: Shift) -> String {
    transform(text, shift, Mode::Encrypt)
}

pub fn decrypt(text: &str, shift: Shift) -> String {
    transform(text, shift, Mode::Decrypt)
}

/// Decrypt under all 26 shifts, shift 0 first
pub fn bruteforce(text: &str) -> Vec<(Shift, String)> {
    (0..26)
        .map(Shift::new)
        .map(|shift| (shift, decrypt(text, shift)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "HELLO WORLD",
        "Hello, World!",
        "The quick brown fox jumps over the lazy dog.",
        "A-B 2C!",
        "zZ yY -- ~`'\"[]{}",
    ];

    #[test]
    fn test_case_preserved() {
        assert_eq!(transform("Hello", Shift::new(3), Mode::Encrypt), "Khoor");
        assert_eq!(transform("HELLO", Shift::new(3), Mode::Encrypt), "KHOOR");
        assert_eq!(transform("hello", Shift::new(3), Mode::Encrypt), "khoor");
    }

    #[test]
    fn test_decrypt() {
        assert_eq!(decrypt("KHOOR", Shift::new(3)), "HELLO");
        assert_eq!(decrypt("Khoor Zruog", Shift::new(3)), "Hello World");
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(transform("Z", Shift::new(1), Mode::Encrypt), "A");
        assert_eq!(transform("A", Shift::new(1), Mode::Decrypt), "Z");
        assert_eq!(transform("z", Shift::new(1), Mode::Encrypt), "a");
        assert_eq!(transform("a", Shift::new(1), Mode::Decrypt), "z");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(transform("A-B 2C!", Shift::new(1), Mode::Encrypt), "B-C 2D!");
        assert_eq!(transform("123 !?", Shift::new(7), Mode::Encrypt), "123 !?");
        assert_eq!(transform("café ñ Ω", Shift::new(1), Mode::Encrypt), "dbgé ñ Ω");
        assert_eq!(transform("ſ\u{212A}", Shift::new(1), Mode::Encrypt), "ſ\u{212A}");
    }

    #[test]
    fn test_shift_zero_is_identity() {
        for text in SAMPLES {
            assert_eq!(transform(text, Shift::ZERO, Mode::Encrypt), *text);
            assert_eq!(transform(text, Shift::ZERO, Mode::Decrypt), *text);
        }
    }

    #[test]
    fn test_round_trip_all_shifts() {
        for s in 0..26 {
            let shift = Shift::new(s);
            for text in SAMPLES {
                let there = transform(text, shift, Mode::Encrypt);
                assert_eq!(transform(&there, shift, Mode::Decrypt), *text, "shift {s}");
            }
        }
    }

    #[test]
    fn test_length_preserved() {
        for text in SAMPLES {
            let out = encrypt(text, Shift::new(11));
            assert_eq!(out.chars().count(), text.chars().count());
        }
    }

    #[test]
    fn test_out_of_range_shift() {
        assert_eq!(transform("ABC", Shift::new(29), Mode::Encrypt), "DEF");
        assert_eq!(transform("ABC", Shift::new(-1), Mode::Encrypt), "ZAB");
        // Must not panic at the extremes
        let _ = transform("Hello", Shift::new(i64::MIN), Mode::Decrypt);
        let _ = transform("Hello", Shift::new(i64::MAX), Mode::Encrypt);
    }

    #[test]
    fn test_transform_str() {
        assert_eq!(transform_str("HELLO", "3", Mode::Encrypt), "KHOOR");
        assert_eq!(transform_str("HELLO", "not a number", Mode::Encrypt), "HELLO");
        assert_eq!(transform_str("HELLO", "29", Mode::Encrypt), "KHOOR");
    }

    #[test]
    fn test_bruteforce() {
        let candidates = bruteforce("KHOOR");
        assert_eq!(candidates.len(), 26);
        assert_eq!(candidates[0], (Shift::ZERO, "KHOOR".to_string()));
        assert_eq!(candidates[3], (Shift::new(3), "HELLO".to_string()));
    }
}
