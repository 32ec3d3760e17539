//! The 2D drawing seam between the pool and whatever shows it.
//!
//! [`FluidField::render`](crate::FluidField::render) only needs two
//! primitives: a full-surface vertical gradient and a centred glyph. Anything
//! implementing [`Surface`] can host the pool: the raster [`Canvas`](crate::Canvas)
//! used by the window, or a [`DisplayList`] that just records what was asked.

use glam::Vec2;

use crate::palette::{GradientStop, Rgba};

/// A 2D target the pool can paint onto.
pub trait Surface {
    /// Drawable size in surface units.
    fn size(&self) -> (u32, u32);

    /// Cover the whole surface with a top-to-bottom gradient.
    fn fill_vertical_gradient(&mut self, stops: &[GradientStop]);

    /// Draw `glyph` centred on `center` at a monospaced `size`.
    fn draw_glyph(&mut self, glyph: char, center: Vec2, size: f32, color: Rgba);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Gradient(Vec<GradientStop>),
    Glyph {
        glyph: char,
        center: Vec2,
        size: f32,
        color: Rgba,
    },
}

/// A [`Surface`] that records commands instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterate over recorded glyphs as `(glyph, center, color)`.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, Vec2, Rgba)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Glyph {
                glyph,
                center,
                color,
                ..
            } => Some((*glyph, *center, *color)),
            DrawCommand::Gradient(_) => None,
        })
    }

    /// Drop recorded commands, keeping the size.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for DisplayList {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_vertical_gradient(&mut self, stops: &[GradientStop]) {
        self.commands.push(DrawCommand::Gradient(stops.to_vec()));
    }

    fn draw_glyph(&mut self, glyph: char, center: Vec2, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Glyph {
            glyph,
            center,
            size,
            color,
        });
    }
}
