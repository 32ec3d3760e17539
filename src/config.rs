//! Tunable constants for the fluid pool.
//!
//! [`FluidConfig::default`] reproduces the landing page look exactly. Every
//! value can be overridden with a `with_*` builder or from a JSON file, where
//! missing keys fall back to their defaults:
//!
//! ```ignore
//! let config = FluidConfig::load("pool.json")?
//!     .with_spacing(10.0)
//!     .with_pool_height(200.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Grid, physics, and rendering parameters of a [`FluidField`](crate::FluidField).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    // Layout
    /// Horizontal distance between grid columns.
    pub spacing: f32,
    /// Row spacing as a fraction of `spacing`.
    pub row_factor: f32,
    /// Height of the band at the bottom of the surface that gets seeded.
    pub pool_height: f32,
    /// Maximum seeding jitter on each axis.
    pub jitter: f32,

    // Clock
    /// Simulation time added per frame.
    pub time_step: f32,

    // Surface wave
    pub wave_amplitude: f32,
    pub wave_phase_speed: f32,
    pub wave_spatial_freq: f32,

    // Attraction toward a hovered control
    pub attraction_radius: f32,
    pub attraction_strength: f32,
    /// Extra upward push, as a multiple of the attraction magnitude.
    pub attraction_lift: f32,

    // Ripples
    pub ripple_radius: f32,
    pub ripple_start_intensity: f32,
    /// Per-frame intensity multiplier.
    pub ripple_decay: f32,
    /// Intensity below which a ripple is retired.
    pub ripple_cutoff: f32,
    pub ripple_wavenumber: f32,
    pub ripple_wave_speed: f32,
    pub ripple_strength: f32,

    // Integration
    pub spring: f32,
    pub damping: f32,
    /// Distance from the bottom edge that particles cannot sink past.
    pub floor_offset: f32,

    // Symbol tiers
    pub agitated_speed: f32,
    pub agitated_height: f32,
    pub active_speed: f32,
    pub active_height: f32,

    // Rendering
    pub glyph_size: f32,
    pub highlight_near: f32,
    pub highlight_far: f32,
    pub fast_speed: f32,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            spacing: 8.0,
            row_factor: 0.7,
            pool_height: 160.0,
            jitter: 1.0,

            time_step: 0.016,

            wave_amplitude: 1.5,
            wave_phase_speed: 0.6,
            wave_spatial_freq: 0.008,

            attraction_radius: 400.0,
            attraction_strength: 1.2,
            attraction_lift: 2.0,

            ripple_radius: 300.0,
            ripple_start_intensity: 8.0,
            ripple_decay: 0.98,
            ripple_cutoff: 0.1,
            ripple_wavenumber: 0.02,
            ripple_wave_speed: 8.0,
            ripple_strength: 0.4,

            spring: 0.02,
            damping: 0.93,
            floor_offset: 20.0,

            agitated_speed: 3.0,
            agitated_height: 40.0,
            active_speed: 1.5,
            active_height: 15.0,

            glyph_size: 14.0,
            highlight_near: 150.0,
            highlight_far: 300.0,
            fast_speed: 2.0,
        }
    }
}

impl FluidConfig {
    /// Vertical distance between grid rows.
    #[inline]
    pub fn row_spacing(&self) -> f32 {
        self.spacing * self.row_factor
    }

    /// Set the horizontal grid spacing.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the height of the seeded pool band.
    pub fn with_pool_height(mut self, pool_height: f32) -> Self {
        self.pool_height = pool_height;
        self
    }

    /// Set the seeding jitter. Zero gives a perfectly regular grid.
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set the per-frame velocity damping factor.
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Set the radius and strength of the hover attraction.
    pub fn with_attraction(mut self, radius: f32, strength: f32) -> Self {
        self.attraction_radius = radius;
        self.attraction_strength = strength;
        self
    }

    /// Set the radius and starting intensity of ripples.
    pub fn with_ripple(mut self, radius: f32, start_intensity: f32) -> Self {
        self.ripple_radius = radius;
        self.ripple_start_intensity = start_intensity;
        self
    }

    /// Set the glyph size used when rendering.
    pub fn with_glyph_size(mut self, size: f32) -> Self {
        self.glyph_size = size;
        self
    }

    /// Check that the values describe a usable pool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)))
            }
        }
        fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{} must not be negative, got {}", name, value)))
            }
        }

        positive("spacing", self.spacing)?;
        positive("row_factor", self.row_factor)?;
        positive("pool_height", self.pool_height)?;
        positive("time_step", self.time_step)?;
        positive("glyph_size", self.glyph_size)?;
        non_negative("jitter", self.jitter)?;
        non_negative("attraction_radius", self.attraction_radius)?;
        non_negative("ripple_radius", self.ripple_radius)?;
        non_negative("ripple_cutoff", self.ripple_cutoff)?;
        non_negative("floor_offset", self.floor_offset)?;
        non_negative("highlight_near", self.highlight_near)?;

        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        // A decay of 1.0 would keep a ripple alive forever.
        if !(self.ripple_decay > 0.0 && self.ripple_decay < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "ripple_decay must be in (0, 1), got {}",
                self.ripple_decay
            )));
        }
        if self.active_speed > self.agitated_speed || self.active_height > self.agitated_height {
            return Err(ConfigError::Invalid(
                "active tier thresholds must not exceed agitated thresholds".into(),
            ));
        }
        if self.highlight_near > self.highlight_far {
            return Err(ConfigError::Invalid(
                "highlight_near must not exceed highlight_far".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the config to a file as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FluidConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.row_spacing() - 5.6).abs() < 1e-5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FluidConfig::from_json(r#"{ "spacing": 12.0 }"#).unwrap();
        assert_eq!(config.spacing, 12.0);
        assert_eq!(config.pool_height, 160.0);
        assert_eq!(config.damping, 0.93);
    }

    #[test]
    fn test_rejects_bad_damping() {
        let err = FluidConfig::default().with_damping(1.5).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_spacing() {
        let result = FluidConfig::from_json(r#"{ "spacing": 0.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_everlasting_ripple() {
        let mut config = FluidConfig::default();
        config.ripple_decay = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = FluidConfig::from_json("{ spacing: ");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.json");

        let config = FluidConfig::default().with_spacing(10.0).with_glyph_size(16.0);
        config.save(&path).unwrap();

        let loaded = FluidConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = FluidConfig::load("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
