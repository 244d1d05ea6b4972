//! Wheel dimensions

use serde::{Deserialize, Serialize};
use wheel_core::{Error, Result};

/// Center and ring radii, in view units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub center_x: f64,
    pub center_y: f64,
    /// Radius the fixed alphabet sits on
    pub outer_radius: f64,
    /// Radius the shifted alphabet sits on
    pub inner_radius: f64,
}

impl Default for WheelConfig {
    /// 500x500 view, wheel centered
    fn default() -> Self {
        Self {
            center_x: 250.0,
            center_y: 250.0,
            outer_radius: 180.0,
            inner_radius: 120.0,
        }
    }
}

impl WheelConfig {
    /// Outer ring must sit strictly outside the inner ring
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!("{name} must be finite, got {value}")));
            }
        }

        if self.inner_radius <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "inner_radius must be positive, got {}",
                self.inner_radius
            )));
        }

        if self.outer_radius <= self.inner_radius {
            return Err(Error::InvalidConfig(format!(
                "outer_radius ({}) must be greater than inner_radius ({})",
                self.outer_radius, self.inner_radius
            )));
        }

        tracing::debug!(config = ?self, "wheel config ok");
        Ok(())
    }
}
