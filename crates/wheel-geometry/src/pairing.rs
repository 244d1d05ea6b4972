//! Outer to inner pairings

use serde::{Deserialize, Serialize};
use wheel_core::{LetterIndex, Mode, Shift, ALPHABET_LEN};

use crate::wheel::Point;

/// An outer ring letter and the inner ring slot it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub outer_index: LetterIndex,
    pub inner_index: LetterIndex,
}

/// Line drawn between a pairing's two letters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub outer_index: LetterIndex,
    pub inner_index: LetterIndex,
    pub from: Point,
    pub to: Point,
}

/// Pairing for every outer index, ascending.
///
/// Encrypt and decrypt under the same shift are inverse permutations.
pub fn compute_mapping(shift: Shift, mode: Mode) -> [Pairing; ALPHABET_LEN] {
    tracing::trace!(%shift, %mode, "compute mapping");
    std::array::from_fn(|i| {
        let outer_index = LetterIndex::new(i as i64);
        Pairing {
            outer_index,
            inner_index: mode.apply(outer_index, shift),
        }
    })
}

/// Letter printed in inner ring slot `index`
pub fn inner_label(index: i64, shift: Shift, mode: Mode) -> char {
    mode.apply(LetterIndex::new(index), shift).letter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encrypt_mapping() {
        let mapping = compute_mapping(Shift::new(3), Mode::Encrypt);
        assert_eq!(mapping[0].inner_index.value(), 3);
        assert_eq!(mapping[23].inner_index.value(), 0);
        assert_eq!(mapping[25].inner_index.value(), 2);
    }

    #[test]
    fn test_decrypt_mapping() {
        let mapping = compute_mapping(Shift::new(3), Mode::Decrypt);
        assert_eq!(mapping[0].inner_index.value(), 23);
        assert_eq!(mapping[3].inner_index.value(), 0);
    }

    #[test]
    fn test_outer_ascending() {
        let mapping = compute_mapping(Shift::new(11), Mode::Decrypt);
        for (i, pairing) in mapping.iter().enumerate() {
            assert_eq!(pairing.outer_index.as_usize(), i);
        }
    }

    #[test]
    fn test_is_permutation() {
        for s in 0..26 {
            for mode in [Mode::Encrypt, Mode::Decrypt] {
                let inner: HashSet<_> = compute_mapping(Shift::new(s), mode)
                    .iter()
                    .map(|p| p.inner_index)
                    .collect();
                assert_eq!(inner.len(), 26);
            }
        }
    }

    #[test]
    fn test_modes_are_inverse() {
        for s in 0..26 {
            let shift = Shift::new(s);
            let encrypt = compute_mapping(shift, Mode::Encrypt);
            let decrypt = compute_mapping(shift, Mode::Decrypt);
            for p in encrypt {
                assert_eq!(decrypt[p.inner_index.as_usize()].inner_index, p.outer_index);
            }
            for p in decrypt {
                assert_eq!(encrypt[p.inner_index.as_usize()].inner_index, p.outer_index);
            }
        }
    }

    #[test]
    fn test_inner_label() {
        assert_eq!(inner_label(0, Shift::new(3), Mode::Encrypt), 'D');
        assert_eq!(inner_label(0, Shift::new(3), Mode::Decrypt), 'X');
        assert_eq!(inner_label(25, Shift::new(1), Mode::Encrypt), 'A');
        assert_eq!(inner_label(26, Shift::ZERO, Mode::Encrypt), 'A');
    }
}
