//! # Cipher Wheel Geometry
//!
//! Positions for 26 letters on two concentric rings, and the lines that
//! join each outer letter to its shifted partner on the inner ring.
//!
//! ```text
//!                 A (index 0, 12 o'clock)
//!             Z       B
//!          Y     D       C      outer ring: fixed alphabet
//!                C   E          inner ring: shifted alphabet
//!             ...   ...
//! ```
//!
//! Nothing here holds rotation state. A new shift or mode is a fresh
//! recomputation; the inner ring slots never move, only the pairings do.

pub mod config;
pub mod layout;
pub mod pairing;
pub mod wheel;

pub use config::WheelConfig;
pub use layout::{RingLetter, WheelLayout};
pub use pairing::{inner_label, Connector, Pairing};
pub use wheel::{LetterPosition, Point, Ring, Segment, WheelGeometry, DEGREES_PER_LETTER};

pub use wheel_core::{Error, LetterIndex, Mode, Result, Shift};

/// Position of `index` on `ring` of the default wheel
pub fn compute_position(index: i64, ring: Ring) -> Point {
    WheelGeometry::default().compute_position(index, ring)
}

/// Outer to inner index pairing, outer index ascending
pub fn compute_mapping(shift: Shift, mode: Mode) -> [Pairing; wheel_core::ALPHABET_LEN] {
    pairing::compute_mapping(shift, mode)
}

/// The 26 connector segments of the default wheel
pub fn produce_connectors(shift: Shift, mode: Mode) -> Vec<Connector> {
    WheelGeometry::default().produce_connectors(shift, mode)
}
