//! Decaying radial disturbance injected by navigation clicks.

use glam::Vec2;

use crate::config::FluidConfig;

/// The single live ripple. A new trigger replaces it outright.
///
/// When `active` is false the other fields are stale leftovers and are never
/// read by the physics; [`Ripple::impulse`] returns zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub active: bool,
    pub origin: Vec2,
    pub intensity: f32,
    pub elapsed: f32,
}

impl Default for Ripple {
    fn default() -> Self {
        Self {
            active: false,
            origin: Vec2::ZERO,
            intensity: 0.0,
            elapsed: 0.0,
        }
    }
}

impl Ripple {
    /// Start a fresh ripple at `origin`, discarding whatever was running.
    pub fn trigger(&mut self, origin: Vec2, config: &FluidConfig) {
        *self = Ripple {
            active: true,
            origin,
            intensity: config.ripple_start_intensity,
            elapsed: 0.0,
        };
    }

    /// Age the ripple by one frame. Returns `true` if it died on this step.
    pub fn decay(&mut self, config: &FluidConfig) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed += config.time_step;
        self.intensity *= config.ripple_decay;
        if self.intensity < config.ripple_cutoff {
            self.active = false;
            return true;
        }
        false
    }

    /// Velocity impulse this ripple imparts on a particle at `position`.
    ///
    /// The impulse runs along the line from the particle to the origin; the
    /// sign of the travelling sine decides whether it pulls in or pushes out.
    pub fn impulse(&self, position: Vec2, config: &FluidConfig) -> Vec2 {
        if !self.active {
            return Vec2::ZERO;
        }
        let offset = self.origin - position;
        let dist = offset.length();
        if dist >= config.ripple_radius {
            return Vec2::ZERO;
        }
        let wave = (dist * config.ripple_wavenumber - self.elapsed * config.ripple_wave_speed).sin()
            * self.intensity;
        offset.normalize_or_zero() * wave * config.ripple_strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_replaces() {
        let config = FluidConfig::default();
        let mut ripple = Ripple::default();
        ripple.trigger(Vec2::new(10.0, 10.0), &config);
        ripple.decay(&config);
        ripple.decay(&config);

        ripple.trigger(Vec2::new(50.0, 60.0), &config);
        assert!(ripple.active);
        assert_eq!(ripple.origin, Vec2::new(50.0, 60.0));
        assert_eq!(ripple.intensity, 8.0);
        assert_eq!(ripple.elapsed, 0.0);
    }

    #[test]
    fn test_single_decay_step() {
        let config = FluidConfig::default();
        let mut ripple = Ripple::default();
        ripple.trigger(Vec2::new(100.0, 580.0), &config);
        ripple.decay(&config);
        assert!((ripple.intensity - 7.84).abs() < 1e-5);
        assert!((ripple.elapsed - 0.016).abs() < 1e-7);
    }

    #[test]
    fn test_dies_after_217_steps() {
        let config = FluidConfig::default();
        let mut ripple = Ripple::default();
        ripple.trigger(Vec2::ZERO, &config);

        for _ in 0..216 {
            assert!(!ripple.decay(&config));
        }
        assert!(ripple.active);
        assert!(ripple.decay(&config));
        assert!(!ripple.active);
    }

    #[test]
    fn test_inactive_ripple_has_no_effect() {
        let config = FluidConfig::default();
        let mut ripple = Ripple::default();
        // Stale state from a previous ripple must be ignored.
        ripple.intensity = 5.0;
        ripple.elapsed = 0.3;
        assert_eq!(ripple.impulse(Vec2::new(1.0, 1.0), &config), Vec2::ZERO);
        assert!(!ripple.decay(&config));
        assert_eq!(ripple.intensity, 5.0);
    }

    #[test]
    fn test_impulse_outside_radius_is_zero() {
        let config = FluidConfig::default();
        let mut ripple = Ripple::default();
        ripple.trigger(Vec2::ZERO, &config);
        assert_eq!(ripple.impulse(Vec2::new(300.0, 0.0), &config), Vec2::ZERO);
        assert_eq!(ripple.impulse(Vec2::new(0.0, 450.0), &config), Vec2::ZERO);
    }

    #[test]
    fn test_impulse_at_origin_is_finite() {
        let config = FluidConfig::default();
        let mut ripple = Ripple::default();
        ripple.trigger(Vec2::new(40.0, 40.0), &config);
        let impulse = ripple.impulse(Vec2::new(40.0, 40.0), &config);
        assert!(impulse.is_finite());
        assert_eq!(impulse, Vec2::ZERO);
    }

    #[test]
    fn test_impulse_is_radial() {
        let config = FluidConfig::default();
        let mut ripple = Ripple::default();
        ripple.trigger(Vec2::ZERO, &config);
        ripple.decay(&config);

        let impulse = ripple.impulse(Vec2::new(100.0, 0.0), &config);
        assert!(impulse.y.abs() < 1e-6);
        assert!(impulse.x != 0.0);
        // sin(100 * 0.02 - 0.016 * 8) * 7.84 * 0.4 along -x
        let expected = (2.0f32 - 0.128).sin() * 7.84 * 0.4;
        assert!((impulse.x + expected).abs() < 1e-3);
    }
}
