//! CPU raster [`Surface`] backed by an RGBA image.
//!
//! The window presenter uploads [`Canvas::as_raw`] to the GPU every frame, and
//! [`Canvas::save_png`] dumps a frame for inspection.

use std::path::Path;

use glam::Vec2;
use image::{ImageFormat, RgbaImage};

use crate::glyphs::{self, GLYPH_COLS, GLYPH_ROWS};
use crate::palette::{sample_gradient, GradientStop, Rgba};
use crate::surface::Surface;

/// An RGBA8 pixel buffer that the pool can draw onto.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Reallocate for a new size. Contents are lost.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.image.dimensions() != (width, height) {
            self.image = RgbaImage::new(width, height);
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Tightly packed RGBA8 rows, top row first.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Color at a pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width() && y < self.height() {
            Some(Rgba::from_rgba8(self.image.get_pixel(x, y).0))
        } else {
            None
        }
    }

    /// Blend `color` onto one pixel. Out-of-bounds coordinates are ignored.
    fn blend(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        px.0 = color.over(Rgba::from_rgba8(px.0)).to_rgba8();
    }

    /// One-pixel outline of the box spanning `min`..`max`.
    pub fn outline_rect(&mut self, min: Vec2, max: Vec2, color: Rgba) {
        let (x0, y0) = (min.x.round() as i64, min.y.round() as i64);
        let (x1, y1) = (max.x.round() as i64, max.y.round() as i64);
        if x1 < x0 || y1 < y0 {
            return;
        }
        for x in x0..=x1 {
            self.blend(x, y0, color);
            if y1 != y0 {
                self.blend(x, y1, color);
            }
        }
        for y in (y0 + 1)..y1 {
            self.blend(x0, y, color);
            if x1 != x0 {
                self.blend(x1, y, color);
            }
        }
    }

    /// Write the current frame as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.image.save_with_format(path, ImageFormat::Png)
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_vertical_gradient(&mut self, stops: &[GradientStop]) {
        let (width, height) = self.image.dimensions();
        let span = height.saturating_sub(1).max(1) as f32;
        for y in 0..height {
            let rgba = sample_gradient(stops, y as f32 / span).to_rgba8();
            for x in 0..width {
                self.image.get_pixel_mut(x, y).0 = rgba;
            }
        }
    }

    fn draw_glyph(&mut self, glyph: char, center: Vec2, size: f32, color: Rgba) {
        if size.is_nan() || size <= 0.0 || !center.is_finite() {
            return;
        }
        let rows = glyphs::bitmap(glyph);
        let cell = size / GLYPH_ROWS as f32;
        let width = cell * GLYPH_COLS as f32;
        let left = center.x - width / 2.0;
        let top = center.y - size / 2.0;

        let x0 = left.floor() as i64;
        let y0 = top.floor() as i64;
        let x1 = (left + width).ceil() as i64;
        let y1 = (top + size).ceil() as i64;

        for py in y0..y1 {
            let row = ((py as f32 + 0.5 - top) / cell).floor();
            if row < 0.0 {
                continue;
            }
            for px in x0..x1 {
                let col = ((px as f32 + 0.5 - left) / cell).floor();
                if col < 0.0 {
                    continue;
                }
                if glyphs::lit(&rows, col as u32, row as u32) {
                    self.blend(px, py, color);
                }
            }
        }
    }
}
