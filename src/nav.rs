//! Navigation controls over the pool.
//!
//! Hovering a control draws the pool toward it; clicking sends a ripple out
//! from its centre and switches section a moment later, once the ripple has
//! had time to start. Content panels are not drawn here; the host only learns
//! which section became active.

use std::time::{Duration, Instant};

use glam::Vec2;
use log::{debug, info};

use crate::field::FluidField;
use crate::palette::{self, Rgba};
use crate::raster::Canvas;

/// Delay between a navigation click and the section switch.
pub const SWITCH_DELAY: Duration = Duration::from_millis(150);

const CONTROL_SIZE: Vec2 = Vec2::new(160.0, 44.0);
const CONTROL_GAP: f32 = 24.0;

/// Content section of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    None,
    Creative,
    Projects,
    Career,
}

impl Section {
    /// Sections that get a navigation control, left to right.
    pub const NAVIGABLE: [Section; 3] = [Section::Creative, Section::Projects, Section::Career];
}

/// A clickable box in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavControl {
    pub section: Section,
    pub min: Vec2,
    pub max: Vec2,
}

impl NavControl {
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Row of navigation controls and the pending section switch.
#[derive(Debug)]
pub struct NavBar {
    controls: Vec<NavControl>,
    hovered: Option<usize>,
    active: Section,
    pending: Option<(Section, Instant)>,
    switch_delay: Duration,
}

impl NavBar {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            hovered: None,
            active: Section::None,
            pending: None,
            switch_delay: SWITCH_DELAY,
        }
    }

    pub fn with_switch_delay(mut self, delay: Duration) -> Self {
        self.switch_delay = delay;
        self
    }

    /// Lay the controls out for a new surface size.
    ///
    /// The old hover no longer points at anything, so it is dropped along
    /// with the attraction target it set.
    pub fn layout(&mut self, width: u32, height: u32, field: &mut FluidField) {
        let count = Section::NAVIGABLE.len() as f32;
        let row_width = count * CONTROL_SIZE.x + (count - 1.0) * CONTROL_GAP;
        let left = (width as f32 - row_width) / 2.0;
        let top = height as f32 * 0.35 - CONTROL_SIZE.y / 2.0;

        self.controls = Section::NAVIGABLE
            .iter()
            .enumerate()
            .map(|(i, &section)| {
                let min = Vec2::new(left + i as f32 * (CONTROL_SIZE.x + CONTROL_GAP), top);
                NavControl {
                    section,
                    min,
                    max: min + CONTROL_SIZE,
                }
            })
            .collect();

        if self.hovered.take().is_some() {
            field.clear_attraction_target();
        }
    }

    pub fn controls(&self) -> &[NavControl] {
        &self.controls
    }

    pub fn hovered(&self) -> Option<&NavControl> {
        self.hovered.and_then(|i| self.controls.get(i))
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Section waiting for its switch delay to elapse.
    pub fn pending(&self) -> Option<Section> {
        self.pending.map(|(section, _)| section)
    }

    pub fn control_at(&self, point: Vec2) -> Option<usize> {
        self.controls.iter().position(|c| c.contains(point))
    }

    /// Update hover state; enter sets the attraction target, leave clears it.
    pub fn pointer_moved(&mut self, point: Vec2, field: &mut FluidField) {
        let now_hovered = self.control_at(point);
        if now_hovered == self.hovered {
            return;
        }
        self.hovered = now_hovered;
        match self.hovered() {
            Some(control) => field.set_attraction_target(control.center()),
            None => field.clear_attraction_target(),
        }
    }

    /// The pointer left the surface entirely.
    pub fn pointer_left(&mut self, field: &mut FluidField) {
        if self.hovered.take().is_some() {
            field.clear_attraction_target();
        }
    }

    /// Handle a click. Returns `true` if it landed on a control.
    pub fn click(&mut self, point: Vec2, now: Instant, field: &mut FluidField) -> bool {
        let Some(control) = self.control_at(point).map(|i| self.controls[i]) else {
            return false;
        };
        field.trigger_ripple(control.center());
        self.pending = Some((control.section, now + self.switch_delay));
        debug!("{:?} clicked, switching after {:?}", control.section, self.switch_delay);
        true
    }

    /// Commit a due section switch. Returns the newly active section.
    pub fn poll(&mut self, now: Instant) -> Option<Section> {
        match self.pending {
            Some((section, due)) if now >= due => {
                self.pending = None;
                self.active = section;
                info!("section switched to {:?}", section);
                Some(section)
            }
            _ => None,
        }
    }

    /// Outline the controls onto the canvas.
    pub fn draw(&self, canvas: &mut Canvas) {
        for (i, control) in self.controls.iter().enumerate() {
            let color = if self.hovered == Some(i) {
                palette::NEAR_TARGET
            } else if control.section == self.active {
                palette::AROUND_TARGET
            } else {
                Rgba::from_rgb8(148, 163, 184, 0.6)
            };
            canvas.outline_rect(control.min, control.max, color);
        }
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FluidConfig;

    fn setup() -> (NavBar, FluidField) {
        let mut field = FluidField::with_seed(FluidConfig::default(), 9);
        field.resize(1280, 720);
        let mut nav = NavBar::new();
        nav.layout(1280, 720, &mut field);
        (nav, field)
    }

    #[test]
    fn test_layout_is_centred() {
        let (nav, _) = setup();
        assert_eq!(nav.controls().len(), 3);
        let middle = nav.controls()[1].center();
        assert!((middle.x - 640.0).abs() < 1e-3);
        assert!((middle.y - 720.0 * 0.35).abs() < 1e-3);
    }

    #[test]
    fn test_hover_sets_and_clears_target() {
        let (mut nav, mut field) = setup();
        let center = nav.controls()[0].center();

        nav.pointer_moved(center, &mut field);
        assert_eq!(field.attraction_target(), Some(center));
        assert_eq!(nav.hovered().map(|c| c.section), Some(Section::Creative));

        nav.pointer_moved(Vec2::new(5.0, 5.0), &mut field);
        assert_eq!(field.attraction_target(), None);
        assert!(nav.hovered().is_none());
    }

    #[test]
    fn test_moving_between_controls_retargets() {
        let (mut nav, mut field) = setup();
        let first = nav.controls()[0].center();
        let last = nav.controls()[2].center();

        nav.pointer_moved(first, &mut field);
        nav.pointer_moved(last, &mut field);
        assert_eq!(field.attraction_target(), Some(last));
    }

    #[test]
    fn test_click_ripples_then_switches_after_delay() {
        let (mut nav, mut field) = setup();
        let control = nav.controls()[1];
        let start = Instant::now();

        assert!(nav.click(control.center(), start, &mut field));
        assert!(field.ripple().active);
        assert_eq!(field.ripple().origin, control.center());
        assert_eq!(nav.pending(), Some(Section::Projects));

        assert_eq!(nav.poll(start + Duration::from_millis(100)), None);
        assert_eq!(nav.active(), Section::None);

        assert_eq!(nav.poll(start + SWITCH_DELAY), Some(Section::Projects));
        assert_eq!(nav.active(), Section::Projects);
        assert_eq!(nav.pending(), None);
    }

    #[test]
    fn test_click_outside_controls() {
        let (mut nav, mut field) = setup();
        assert!(!nav.click(Vec2::new(1.0, 700.0), Instant::now(), &mut field));
        assert!(!field.ripple().active);
    }

    #[test]
    fn test_relayout_drops_hover() {
        let (mut nav, mut field) = setup();
        nav.pointer_moved(nav.controls()[0].center(), &mut field);
        nav.layout(800, 600, &mut field);
        assert!(nav.hovered().is_none());
        assert_eq!(field.attraction_target(), None);
    }

    #[test]
    fn test_pointer_still_over_control_after_relayout() {
        let (mut nav, mut field) = setup();
        let center = nav.controls()[0].center();
        nav.pointer_moved(center, &mut field);

        nav.layout(1280, 720, &mut field);
        nav.pointer_moved(center, &mut field);
        assert_eq!(field.attraction_target(), Some(center));
    }

    #[test]
    fn test_pointer_left() {
        let (mut nav, mut field) = setup();
        nav.pointer_moved(nav.controls()[2].center(), &mut field);
        nav.pointer_left(&mut field);
        assert_eq!(field.attraction_target(), None);
    }
}
