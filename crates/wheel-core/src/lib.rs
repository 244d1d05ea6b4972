//! # Cipher Wheel Core
//!
//! Shared vocabulary for the cipher wheel: the fixed 26-letter alphabet,
//! the normalized shift, and the direction of substitution.
//!
//! ```text
//!  OUTER (fixed)      A  B  C  D  E  ...  Z
//!                     │  │  │  │  │       │
//!  INNER (shift 3)    D  E  F  G  H  ...  C
//! ```
//!
//! Every value here is closed over `0..26`. Out-of-range input is wrapped,
//! never rejected, so nothing built on these types can index outside the
//! alphabet.

pub mod alphabet;
pub mod shift;

pub use alphabet::{LetterCase, LetterIndex, ALPHABET, ALPHABET_LEN};
pub use shift::{Mode, Shift};

/// Result type for cipher wheel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the cipher wheel
///
/// The transform and geometry operations themselves are total. Only the
/// surfaces that read caller-supplied names or layouts can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown mode '{0}' (expected encrypt or decrypt)")]
    InvalidMode(String),

    #[error("Invalid wheel configuration: {0}")]
    InvalidConfig(String),
}
