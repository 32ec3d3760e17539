//! The fluid pool: a grid of glyph particles along the bottom of the surface.
//!
//! Each frame the host calls [`FluidField::advance`] and then
//! [`FluidField::render`]. Between frames, input handlers may call
//! [`FluidField::set_attraction_target`], [`FluidField::clear_attraction_target`]
//! and [`FluidField::trigger_ripple`]; every write replaces the previous value
//! whole, so it does not matter which side of a frame it lands on.
//!
//! # Per-frame update
//!
//! Particles are independent damped springs. For each one, in order:
//!
//! 1. a travelling sine wave sets the target height around `rest_height`
//! 2. a hovered control pulls nearby particles toward it and lifts them
//! 3. the active ripple adds a radial travelling-wave impulse
//! 4. a spring pulls vertically toward the target height
//! 5. velocity is damped, then integrated into position
//! 6. x wraps around the surface edges; y cannot sink below the floor
//! 7. the glyph is re-rolled within the tier matching the current motion
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use tidepool::{DisplayList, FluidConfig, FluidField};
//!
//! let mut field = FluidField::with_seed(FluidConfig::default(), 7);
//! field.resize(800, 600);
//! field.trigger_ripple(Vec2::new(100.0, 580.0));
//!
//! let mut surface = DisplayList::new(800, 600);
//! field.advance();
//! field.render(&mut surface);
//! assert_eq!(surface.glyphs().count(), field.particles().len());
//! ```

use glam::Vec2;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FluidConfig;
use crate::palette::{self, Rgba, BACKGROUND, SEED_GLYPHS, TIER_WIDTH};
use crate::particle::{Particle, SymbolTier};
use crate::ripple::Ripple;
use crate::surface::Surface;
use crate::time::Clock;

/// Owns the particle grid, the ripple, and the hover target.
pub struct FluidField {
    config: FluidConfig,
    /// Surface size the grid was seeded for. `None` until the first resize.
    size: Option<(u32, u32)>,
    particles: Vec<Particle>,
    ripple: Ripple,
    target: Option<Vec2>,
    clock: Clock,
    rng: StdRng,
}

impl FluidField {
    /// Create an empty field. Call [`resize`](Self::resize) to seed it.
    pub fn new(config: FluidConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an empty field with a deterministic random source.
    pub fn with_seed(config: FluidConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FluidConfig, rng: StdRng) -> Self {
        let clock = Clock::new(config.time_step);
        Self {
            config,
            size: None,
            particles: Vec::new(),
            ripple: Ripple::default(),
            target: None,
            clock,
            rng,
        }
    }

    /// Reseed the grid for a surface of `width` x `height`.
    ///
    /// Always discards the existing particles. Columns cover the full width;
    /// rows fill the pool band anchored to the bottom edge.
    pub fn initialize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
        self.particles.clear();

        let spacing = self.config.spacing;
        let row_spacing = self.config.row_spacing();
        if !(spacing.is_finite() && spacing > 0.0 && row_spacing.is_finite() && row_spacing > 0.0) {
            warn!(
                "grid spacing {} x {} is not positive, pool left empty",
                spacing, row_spacing
            );
            return;
        }
        let cols = (width as f32 / spacing).floor() as usize;
        let rows = (self.config.pool_height / row_spacing).floor() as usize;
        let Some(count) = rows.checked_mul(cols) else {
            warn!("{} x {} grid is too large, pool left empty", cols, rows);
            return;
        };
        if let Err(e) = self.particles.try_reserve(count) {
            warn!("cannot allocate {} x {} grid ({}), pool left empty", cols, rows, e);
            return;
        }
        let top = height as f32 - self.config.pool_height;
        let jitter = self.config.jitter;

        for row in 0..rows {
            let rest_height = top + row as f32 * row_spacing;
            for col in 0..cols {
                let x = col as f32 * spacing + spacing / 2.0;
                let offset = Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * 2.0 * jitter,
                    (self.rng.gen::<f32>() - 0.5) * 2.0 * jitter,
                );
                self.particles.push(Particle {
                    position: Vec2::new(x, rest_height) + offset,
                    rest_height,
                    velocity: Vec2::ZERO,
                    symbol: self.rng.gen_range(0..SEED_GLYPHS),
                    intensity: 0.5 + self.rng.gen::<f32>() * 0.3,
                });
            }
        }

        debug!(
            "seeded {} particles ({} x {}) for {}x{} surface",
            self.particles.len(),
            cols,
            rows,
            width,
            height
        );
    }

    /// Reseed only if the surface size changed. Returns `true` if it did.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.size == Some((width, height)) {
            return false;
        }
        self.initialize(width, height);
        true
    }

    /// Advance the simulation by one fixed step.
    pub fn advance(&mut self) {
        let time = self.clock.tick();
        if self.ripple.decay(&self.config) {
            debug!("ripple at {:?} faded after {:.2}", self.ripple.origin, self.ripple.elapsed);
        }

        let (width, height) = self.size.unwrap_or((0, 0));
        let width = width as f32;
        let floor = height as f32 - self.config.floor_offset;

        let config = &self.config;
        let ripple = &self.ripple;
        let target = self.target;
        let rng = &mut self.rng;

        for p in &mut self.particles {
            let wave_height = p.rest_height
                + config.wave_amplitude
                    * (config.wave_phase_speed * time + config.wave_spatial_freq * p.position.x).sin();

            if let Some(target) = target {
                p.velocity += attraction(p.position, target, config);
            }
            p.velocity += ripple.impulse(p.position, config);
            p.velocity.y += (wave_height - p.position.y) * config.spring;

            p.velocity *= config.damping;
            p.position += p.velocity;

            // Wrap x; distances to targets are not wrap-aware.
            if p.position.x < 0.0 {
                p.position.x = width;
            } else if p.position.x > width {
                p.position.x = 0.0;
            }
            if p.position.y > floor {
                p.position.y = floor;
            }

            let tier = SymbolTier::of(p, config);
            p.symbol = palette::tier_base(tier) + rng.gen_range(0..TIER_WIDTH);
        }
    }

    /// Paint the backdrop and every particle. Does not touch particle state.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_vertical_gradient(&BACKGROUND);
        for p in &self.particles {
            surface.draw_glyph(
                palette::glyph(p.symbol),
                p.position,
                self.config.glyph_size,
                self.color_of(p),
            );
        }
    }

    /// Color band for a particle: closeness to the hover target first, then speed.
    pub fn color_of(&self, particle: &Particle) -> Rgba {
        let dist = self
            .target
            .map_or(f32::INFINITY, |t| t.distance(particle.position));

        if dist < self.config.highlight_near {
            palette::NEAR_TARGET
        } else if dist < self.config.highlight_far {
            palette::AROUND_TARGET
        } else if particle.speed() > self.config.fast_speed {
            palette::FAST
        } else {
            palette::RESTING
        }
    }

    /// Start a ripple at `origin`, replacing any ripple still running.
    pub fn trigger_ripple(&mut self, origin: Vec2) {
        if self.ripple.active {
            debug!("ripple at {:?} replaced by one at {:?}", self.ripple.origin, origin);
        }
        self.ripple.trigger(origin, &self.config);
    }

    /// Pull nearby particles toward `target` until cleared or replaced.
    pub fn set_attraction_target(&mut self, target: Vec2) {
        self.target = Some(target);
    }

    /// Stop pulling particles toward the hovered control.
    pub fn clear_attraction_target(&mut self) {
        self.target = None;
    }

    /// Current attraction target, if a control is hovered.
    pub fn attraction_target(&self) -> Option<Vec2> {
        self.target
    }

    /// Particles in seeding order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The single ripple slot, active or not.
    pub fn ripple(&self) -> &Ripple {
        &self.ripple
    }

    /// Simulation clock driving the wave phase.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Constants this field was built with.
    pub fn config(&self) -> &FluidConfig {
        &self.config
    }

    /// Surface size the grid was last seeded for.
    pub fn size(&self) -> (u32, u32) {
        self.size.unwrap_or((0, 0))
    }
}

/// Velocity impulse toward a hovered control, plus the extra lift.
fn attraction(position: Vec2, target: Vec2, config: &FluidConfig) -> Vec2 {
    let offset = target - position;
    let dist = offset.length();
    if dist >= config.attraction_radius {
        return Vec2::ZERO;
    }
    let falloff = (config.attraction_radius - dist) / config.attraction_radius;
    let force = falloff * falloff * config.attraction_strength;
    offset.normalize_or_zero() * force - Vec2::new(0.0, force * config.attraction_lift)
}
