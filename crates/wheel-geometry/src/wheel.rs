//! Ring positions

use serde::{Deserialize, Serialize};
use wheel_core::{LetterIndex, Mode, Result, Shift, ALPHABET_LEN};

use crate::config::WheelConfig;
use crate::pairing::{self, Connector};

/// Angular step between neighbouring letters
pub const DEGREES_PER_LETTER: f64 = 360.0 / ALPHABET_LEN as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ring {
    /// Fixed reference alphabet
    Outer,
    /// Shifted alphabet
    Inner,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Straight line between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LetterPosition {
    pub index: LetterIndex,
    pub ring: Ring,
    pub x: f64,
    pub y: f64,
}

impl LetterPosition {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Geometry for one wheel size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelGeometry {
    config: WheelConfig,
}

impl WheelGeometry {
    pub fn new(config: WheelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn center(&self) -> Point {
        Point::new(self.config.center_x, self.config.center_y)
    }

    pub fn radius(&self, ring: Ring) -> f64 {
        match ring {
            Ring::Outer => self.config.outer_radius,
            Ring::Inner => self.config.inner_radius,
        }
    }

    /// Where letter `index` sits on `ring`.
    ///
    /// Index 0 is straight above the center and indices run clockwise.
    /// `index` wraps, so `i` and `i + 26` land on the same spot.
    pub fn compute_position(&self, index: i64, ring: Ring) -> Point {
        self.position_of(LetterIndex::new(index), ring)
    }

    pub fn position_of(&self, index: LetterIndex, ring: Ring) -> Point {
        let angle = (f64::from(index.value()) * DEGREES_PER_LETTER).to_radians();
        let radius = self.radius(ring);
        Point::new(
            self.config.center_x + radius * angle.sin(),
            self.config.center_y - radius * angle.cos(),
        )
    }

    /// All 26 slots of one ring, index ascending
    pub fn letter_positions(&self, ring: Ring) -> Vec<LetterPosition> {
        LetterIndex::all()
            .map(|index| {
                let p = self.position_of(index, ring);
                LetterPosition { index, ring, x: p.x, y: p.y }
            })
            .collect()
    }

    /// One segment per pairing, outer index ascending; always 26
    pub fn produce_connectors(&self, shift: Shift, mode: Mode) -> Vec<Connector> {
        pairing::compute_mapping(shift, mode)
            .iter()
            .map(|p| Connector {
                outer_index: p.outer_index,
                inner_index: p.inner_index,
                from: self.position_of(p.outer_index, Ring::Outer),
                to: self.position_of(p.inner_index, Ring::Inner),
            })
            .collect()
    }

    /// Marker from the center up to the outer ring's index 0
    pub fn rotation_indicator(&self) -> Segment {
        Segment {
            from: self.center(),
            to: self.position_of(LetterIndex::new(0), Ring::Outer),
        }
    }
}
