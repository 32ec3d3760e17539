//! # tidepool
//!
//! An animated pool of glyph particles for the bottom of a landing page.
//!
//! The pool is a grid of particles seeded in a band along the bottom edge of a
//! 2D surface. Each frame every particle bobs on a travelling wave, is pulled
//! up toward whichever navigation control the pointer hovers, and is kicked by
//! the ripple a navigation click sends out. Its glyph flickers between calm,
//! active and agitated shapes depending on how hard it is moving.
//!
//! ## Quick Start
//!
//! ```
//! use glam::Vec2;
//! use tidepool::prelude::*;
//!
//! let mut field = FluidField::new(FluidConfig::default());
//! let mut canvas = Canvas::new(800, 600);
//! field.resize(800, 600);
//!
//! // From input handlers, at any time:
//! field.set_attraction_target(Vec2::new(400.0, 200.0));
//! field.trigger_ripple(Vec2::new(400.0, 200.0));
//!
//! // Once per display refresh:
//! field.advance();
//! field.render(&mut canvas);
//! ```
//!
//! ## Hosts
//!
//! The pool draws through the [`Surface`] trait. [`Canvas`] rasterizes into an
//! RGBA image, [`DisplayList`] records draw calls for a host with its own
//! renderer. The `tidepool` binary wires a [`Canvas`] to a winit window with
//! [`NavBar`](nav::NavBar) controls standing in for the page navigation.

pub mod config;
pub mod error;
pub mod field;
pub mod glyphs;
pub mod gpu;
pub mod input;
pub mod nav;
pub mod palette;
pub mod particle;
pub mod raster;
pub mod ripple;
pub mod surface;
pub mod time;
pub mod window;

pub use config::FluidConfig;
pub use error::{ConfigError, GpuError, ViewerError};
pub use field::FluidField;
pub use palette::{GradientStop, Rgba, GLYPHS};
pub use particle::{Particle, SymbolTier};
pub use raster::Canvas;
pub use ripple::Ripple;
pub use surface::{DisplayList, DrawCommand, Surface};

/// Common imports for hosting a pool.
pub mod prelude {
    pub use crate::config::FluidConfig;
    pub use crate::field::FluidField;
    pub use crate::nav::{NavBar, Section};
    pub use crate::raster::Canvas;
    pub use crate::surface::{DisplayList, Surface};
}
