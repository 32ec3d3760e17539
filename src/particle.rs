//! A single cell of the pool surface.

use glam::Vec2;

use crate::config::FluidConfig;

/// One particle of the pool.
///
/// Particles never interact with each other; each one is a damped spring
/// pulled toward its own travelling-wave height and pushed around by the
/// hover target and the active ripple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current location in surface coordinates (y grows downward).
    pub position: Vec2,
    /// Equilibrium height seeded from the grid row, without jitter.
    pub rest_height: f32,
    pub velocity: Vec2,
    /// Index into [`GLYPHS`](crate::palette::GLYPHS). Re-rolled every frame.
    pub symbol: usize,
    /// Per-particle scalar in 0.5..=0.8 set at seeding. Carried, never read.
    pub intensity: f32,
}

impl Particle {
    /// Manhattan speed, used for tier selection.
    #[inline]
    pub fn l1_speed(&self) -> f32 {
        self.velocity.x.abs() + self.velocity.y.abs()
    }

    /// Euclidean speed, used for coloring.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// How far the particle sits above its rest height. Sinking counts as zero.
    #[inline]
    pub fn lift(&self) -> f32 {
        (self.rest_height - self.position.y).max(0.0)
    }
}

/// Motion bucket deciding which slice of the glyph palette a particle shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolTier {
    Calm,
    Active,
    Agitated,
}

impl SymbolTier {
    /// Pick the tier for a given L1 speed and lift above rest height.
    ///
    /// Thresholds are strict: a value exactly on a threshold stays in the
    /// lower tier.
    pub fn classify(speed: f32, lift: f32, config: &FluidConfig) -> Self {
        if speed > config.agitated_speed || lift > config.agitated_height {
            SymbolTier::Agitated
        } else if speed > config.active_speed || lift > config.active_height {
            SymbolTier::Active
        } else {
            SymbolTier::Calm
        }
    }

    pub fn of(particle: &Particle, config: &FluidConfig) -> Self {
        Self::classify(particle.l1_speed(), particle.lift(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(velocity: Vec2, y: f32) -> Particle {
        Particle {
            position: Vec2::new(100.0, y),
            rest_height: 500.0,
            velocity,
            symbol: 0,
            intensity: 0.6,
        }
    }

    #[test]
    fn test_speed_measures() {
        let p = particle(Vec2::new(3.0, -4.0), 500.0);
        assert_eq!(p.l1_speed(), 7.0);
        assert_eq!(p.speed(), 5.0);
    }

    #[test]
    fn test_lift_ignores_sinking() {
        assert_eq!(particle(Vec2::ZERO, 480.0).lift(), 20.0);
        assert_eq!(particle(Vec2::ZERO, 520.0).lift(), 0.0);
    }

    #[test]
    fn test_speed_thresholds() {
        let config = FluidConfig::default();
        assert_eq!(SymbolTier::classify(3.1, 0.0, &config), SymbolTier::Agitated);
        assert_eq!(SymbolTier::classify(2.9, 0.0, &config), SymbolTier::Active);
        assert_eq!(SymbolTier::classify(1.6, 0.0, &config), SymbolTier::Active);
        assert_eq!(SymbolTier::classify(1.4, 0.0, &config), SymbolTier::Calm);
    }

    #[test]
    fn test_height_thresholds() {
        let config = FluidConfig::default();
        assert_eq!(SymbolTier::classify(0.0, 41.0, &config), SymbolTier::Agitated);
        assert_eq!(SymbolTier::classify(0.0, 39.0, &config), SymbolTier::Active);
        assert_eq!(SymbolTier::classify(0.0, 16.0, &config), SymbolTier::Active);
        assert_eq!(SymbolTier::classify(0.0, 14.0, &config), SymbolTier::Calm);
    }

    #[test]
    fn test_tier_uses_l1_speed() {
        let config = FluidConfig::default();
        // Euclidean speed ~1.41 would be calm, L1 speed 2.0 is active.
        let p = particle(Vec2::new(1.0, 1.0), 500.0);
        assert_eq!(SymbolTier::of(&p, &config), SymbolTier::Active);
    }
}
