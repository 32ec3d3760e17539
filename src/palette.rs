//! Glyphs and colors of the pool.
//!
//! The glyph palette is ordered from calm to agitated. Only the first twelve
//! entries are ever selected by motion tiers; the rest stay available so that
//! an out-of-range index still clamps to a real glyph.

use crate::particle::SymbolTier;

/// Display glyphs, indexed by [`Particle::symbol`](crate::Particle::symbol).
pub const GLYPHS: [char; 18] = [
    '~', '≈', '∼', '⌐', '¬', '∩', '∪', '°', '·', '`', ',', '.', ':', ';', '▴', '▾', '◆', '◇',
];

/// Number of glyphs drawn from when a particle is first seeded.
pub const SEED_GLYPHS: usize = 6;

/// Look up the glyph for a symbol index, clamping into the palette.
#[inline]
pub fn glyph(index: usize) -> char {
    GLYPHS[index.min(GLYPHS.len() - 1)]
}

/// First palette index of each tier's sub-range. Each tier spans four glyphs.
#[inline]
pub fn tier_base(tier: SymbolTier) -> usize {
    match tier {
        SymbolTier::Calm => 0,
        SymbolTier::Active => 4,
        SymbolTier::Agitated => 8,
    }
}

/// Glyphs per tier.
pub const TIER_WIDTH: usize = 4;

/// Straight (non-premultiplied) RGBA color with float channels in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels and a float alpha, like CSS `rgba()`.
    pub const fn from_rgb8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    /// Build an opaque color from a `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self::from_rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 1.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Composite `self` over `dst` (source-over).
    pub fn over(self, dst: Rgba) -> Rgba {
        let a = self.a + dst.a * (1.0 - self.a);
        if a <= 0.0 {
            return Rgba::new(0.0, 0.0, 0.0, 0.0);
        }
        let blend = |s: f32, d: f32| (s * self.a + d * dst.a * (1.0 - self.a)) / a;
        Rgba {
            r: blend(self.r, dst.r),
            g: blend(self.g, dst.g),
            b: blend(self.b, dst.b),
            a,
        }
    }

    /// Quantize to 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn from_rgba8(px: [u8; 4]) -> Self {
        Self {
            r: px[0] as f32 / 255.0,
            g: px[1] as f32 / 255.0,
            b: px[2] as f32 / 255.0,
            a: px[3] as f32 / 255.0,
        }
    }
}

/// One stop of a vertical gradient. `offset` runs 0 (top) to 1 (bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Slate backdrop behind the pool, top to bottom.
pub const BACKGROUND: [GradientStop; 4] = [
    GradientStop { offset: 0.0, color: Rgba::from_hex(0x0F172A) },
    GradientStop { offset: 0.3, color: Rgba::from_hex(0x1E293B) },
    GradientStop { offset: 0.7, color: Rgba::from_hex(0x334155) },
    GradientStop { offset: 1.0, color: Rgba::from_hex(0x475569) },
];

/// Sample a sorted list of gradient stops at `t`.
pub fn sample_gradient(stops: &[GradientStop], t: f32) -> Rgba {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Rgba::new(0.0, 0.0, 0.0, 0.0),
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    last.color
}

/// Particle color bands, brightest first.
pub const NEAR_TARGET: Rgba = Rgba::from_rgb8(0, 255, 255, 0.95);
pub const AROUND_TARGET: Rgba = Rgba::from_rgb8(64, 224, 255, 0.8);
pub const FAST: Rgba = Rgba::from_rgb8(100, 200, 255, 0.7);
pub const RESTING: Rgba = Rgba::from_rgb8(120, 180, 220, 0.6);
