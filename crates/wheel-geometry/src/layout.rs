//! Complete wheel snapshot
//!
//! Everything a renderer needs for one (shift, mode): where each letter
//! goes, which letter is printed there, and the lines between them.
//! Plain numbers and characters only.

use serde::Serialize;
use wheel_core::{LetterIndex, Mode, Shift};

use crate::pairing::{inner_label, Connector};
use crate::wheel::{Point, Ring, Segment, WheelGeometry};

/// One labelled slot on a ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingLetter {
    pub index: LetterIndex,
    pub letter: char,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelLayout {
    pub shift: Shift,
    pub mode: Mode,
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Fixed alphabet, A at the top
    pub outer: Vec<RingLetter>,
    /// Slot `i` shows the letter that outer letter `i` becomes
    pub inner: Vec<RingLetter>,
    pub connectors: Vec<Connector>,
    pub indicator: Segment,
}

impl WheelLayout {
    pub fn compute(geometry: &WheelGeometry, shift: Shift, mode: Mode) -> Self {
        tracing::debug!(%shift, %mode, "computing wheel layout");

        let outer = LetterIndex::all()
            .map(|index| RingLetter {
                index,
                letter: index.letter(),
                position: geometry.position_of(index, Ring::Outer),
            })
            .collect();

        let inner = LetterIndex::all()
            .map(|index| RingLetter {
                index,
                letter: inner_label(i64::from(index.value()), shift, mode),
                position: geometry.position_of(index, Ring::Inner),
            })
            .collect();

        Self {
            shift,
            mode,
            center: geometry.center(),
            outer_radius: geometry.radius(Ring::Outer),
            inner_radius: geometry.radius(Ring::Inner),
            outer,
            inner,
            connectors: geometry.produce_connectors(shift, mode),
            indicator: geometry.rotation_indicator(),
        }
    }

    /// Text shown in the hub
    pub fn center_label(&self) -> String {
        self.shift.to_string()
    }
}
