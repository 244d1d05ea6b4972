//! # Cipher Wheel Transform
//!
//! Case-preserving shift cipher over the 26-letter Latin alphabet.
//!
//! # Modules
//! - `transform` - Per-character shift, encrypt/decrypt, brute force
//! - `mapping` - Original vs shifted alphabet table
//!
//! Everything here is total: any text and any shift produce output of the
//! same length, with non-letters passed through untouched.

pub mod mapping;
pub mod transform;

pub use mapping::AlphabetMapping;
pub use transform::{bruteforce, decrypt, encrypt, transform, transform_char, transform_str};

pub use wheel_core::{Mode, Shift};
