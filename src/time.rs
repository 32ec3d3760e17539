//! Time facilities for the pool.
//!
//! Two clocks live here and they must not be confused:
//!
//! - [`Clock`] is the simulation clock. It advances by a fixed nominal step
//!   every frame, regardless of how long the frame actually took, and feeds the
//!   phase of the travelling surface wave.
//! - [`FrameTimer`] measures real wall-clock frames for the host (FPS in the
//!   window title). The simulation never reads it.
//!
//! # Example
//!
//! ```
//! use tidepool::time::Clock;
//!
//! let mut clock = Clock::new(0.016);
//! clock.tick();
//! clock.tick();
//! assert_eq!(clock.frame(), 2);
//! assert!((clock.elapsed() - 0.032).abs() < 1e-6);
//! ```

use std::time::{Duration, Instant};

/// Fixed-step simulation clock.
///
/// Monotonically increasing, never reset during a field's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    step: f32,
    elapsed: f32,
    frame: u64,
}

impl Clock {
    /// Create a clock that advances by `step` time-units per tick.
    pub fn new(step: f32) -> Self {
        Self {
            step,
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Advance by one fixed step. Returns the new elapsed time.
    pub fn tick(&mut self) -> f32 {
        self.elapsed += self.step;
        self.frame += 1;
        self.elapsed
    }

    /// Accumulated simulation time.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The fixed step added per tick.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Number of ticks so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// Wall-clock frame timing for the host.
///
/// Tracks delta time, frame count, and a periodically refreshed FPS estimate.
#[derive(Debug)]
pub struct FrameTimer {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameTimer {
    /// Create a new timer starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Record a frame at `now`.
    ///
    /// Returns `true` when the FPS estimate was refreshed on this call.
    pub fn update(&mut self, now: Instant) -> bool {
        self.delta_secs = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            return true;
        }
        false
    }

    /// Time since last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
