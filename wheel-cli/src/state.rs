//! Caller-owned wheel state
//!
//! The text, shift and mode live here, outside the cipher and geometry
//! crates. Any change is followed by a fresh [`WheelState::snapshot`].

use serde::Serialize;

use wheel_cipher::AlphabetMapping;
use wheel_core::{Mode, Shift};
use wheel_geometry::{WheelGeometry, WheelLayout};

use crate::config::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelState {
    pub text: String,
    pub shift: Shift,
    pub mode: Mode,
}

/// Everything derived from one state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub input: String,
    pub output: String,
    pub mapping: AlphabetMapping,
    pub layout: WheelLayout,
}

impl WheelState {
    pub fn new(text: impl Into<String>, shift: Shift, mode: Mode) -> Self {
        Self {
            text: text.into(),
            shift,
            mode,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.text.clone(), settings.shift, settings.mode)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Shift as typed; unparseable input becomes 0
    pub fn set_shift_input(&mut self, input: &str) {
        self.shift = Shift::parse(input);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn output(&self) -> String {
        wheel_cipher::transform(&self.text, self.shift, self.mode)
    }

    pub fn snapshot(&self, geometry: &WheelGeometry) -> Snapshot {
        Snapshot {
            input: self.text.clone(),
            output: self.output(),
            mapping: AlphabetMapping::new(self.shift, self.mode),
            layout: WheelLayout::compute(geometry, self.shift, self.mode),
        }
    }
}
