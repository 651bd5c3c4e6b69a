//! Engine configuration.
//!
//! Holds the tunables of the escape-time engine: the initial plane extents,
//! the per-step zoom ratio, the iteration budget and the bailout radius.

use crate::PlaneError;
use serde::{Deserialize, Serialize};

/// Tunable parameters for the plane engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plane width at zoom level 0.
    pub base_width: f64,
    /// Plane height at zoom level 0, before the aspect ratio is applied.
    pub base_height: f64,
    /// Multiplier applied per zoom step. Values below 1 shrink the window.
    pub zoom_factor: f64,
    /// Iteration budget. A point that never escapes reports exactly this count.
    pub max_iterations: u32,
    /// Magnitude at which an orbit is considered escaped.
    pub bailout_radius: f64,
}

/// Default configuration: whole set visible at zoom 0, halving per zoom step.
pub const DEFAULT_CONFIG: EngineConfig = EngineConfig {
    base_width: 4.0,
    base_height: 4.0,
    zoom_factor: 0.5,
    max_iterations: 64,
    bailout_radius: 2.0,
};

impl Default for EngineConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl EngineConfig {
    /// Parse a JSON document. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, PlaneError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable by the engine.
    pub fn validate(&self) -> Result<(), PlaneError> {
        if !(self.base_width.is_finite() && self.base_width > 0.0) {
            return Err(PlaneError::InvalidConfig(format!(
                "base_width must be positive and finite, got {}",
                self.base_width
            )));
        }
        if !(self.base_height.is_finite() && self.base_height > 0.0) {
            return Err(PlaneError::InvalidConfig(format!(
                "base_height must be positive and finite, got {}",
                self.base_height
            )));
        }
        if !(self.zoom_factor > 0.0 && self.zoom_factor < 1.0) {
            return Err(PlaneError::InvalidConfig(format!(
                "zoom_factor must be in (0, 1), got {}",
                self.zoom_factor
            )));
        }
        if self.max_iterations == 0 {
            return Err(PlaneError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.bailout_radius.is_finite() && self.bailout_radius > 0.0) {
            return Err(PlaneError::InvalidConfig(format!(
                "bailout_radius must be positive and finite, got {}",
                self.bailout_radius
            )));
        }
        Ok(())
    }

    /// Squared bailout radius, compared against |z|² in the iteration loop.
    #[inline]
    pub fn bailout_sq(&self) -> f64 {
        self.bailout_radius * self.bailout_radius
    }
}
