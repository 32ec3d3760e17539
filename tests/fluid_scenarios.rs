//! End-to-end behavior of the pool through its public API.

use glam::Vec2;
use tidepool::prelude::*;
use tidepool::{DrawCommand, Rgba};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn field(seed: u64) -> FluidField {
    let mut field = FluidField::with_seed(FluidConfig::default(), seed);
    field.resize(WIDTH, HEIGHT);
    field
}

fn wave_height(field: &FluidField, rest_height: f32, x: f32) -> f32 {
    let c = field.config();
    rest_height + c.wave_amplitude * (c.wave_phase_speed * field.clock().elapsed() + c.wave_spatial_freq * x).sin()
}

#[test]
fn seeded_grid_covers_width_and_pool_band() {
    let field = field(1);
    let pool = field.config().pool_height;
    let jitter = field.config().jitter;

    assert!(!field.particles().is_empty());
    for p in field.particles() {
        assert!(p.position.x >= -jitter && p.position.x <= WIDTH as f32 + jitter);
        assert!(p.rest_height >= HEIGHT as f32 - pool && p.rest_height <= HEIGHT as f32);
    }
}

#[test]
fn reseeding_same_size_keeps_grid() {
    let mut a = field(1);
    let b = field(2);

    let heights = |f: &FluidField| f.particles().iter().map(|p| p.rest_height).collect::<Vec<_>>();
    assert_eq!(heights(&a), heights(&b));

    let count = a.particles().len();
    a.initialize(WIDTH, HEIGHT);
    assert_eq!(a.particles().len(), count);
    assert_eq!(heights(&a), heights(&b));
}

#[test]
fn one_step_from_rest_moves_little() {
    let mut field = field(3);
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    field.advance();

    // From rest, only the spring acts: at most (amplitude + jitter) * spring * damping.
    // Rows seeded below the floor are the exception and snap up onto it.
    let c = field.config();
    let floor = HEIGHT as f32 - c.floor_offset;
    let bound = (c.wave_amplitude + c.jitter) * c.spring * c.damping + 1e-4;
    for (p, old) in field.particles().iter().zip(before) {
        if old.y > floor {
            assert!(p.position.y <= floor);
            assert_eq!(p.position.x, old.x);
            continue;
        }
        assert!((p.position - old).length() <= bound, "moved {:?} -> {:?}", old, p.position);
    }
}

#[test]
fn unforced_pool_settles_on_the_wave() {
    let mut field = field(4);
    for _ in 0..2000 {
        field.advance();
    }

    let c = field.config();
    let floor = HEIGHT as f32 - c.floor_offset;
    let mut checked = 0;
    // Rows whose wave dips below the floor are pinned there and never settle.
    for p in field.particles().iter().filter(|p| p.rest_height + c.wave_amplitude + 1.0 < floor) {
        assert!(p.velocity.length() < 0.05, "velocity {:?}", p.velocity);
        let target = wave_height(&field, p.rest_height, p.position.x);
        assert!((p.position.y - target).abs() < 1.0);
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn hover_below_particle_lifts_it() {
    let mut field = field(5);
    let index = field.particles().len() / 2;
    let p = field.particles()[index];

    field.set_attraction_target(p.position + Vec2::new(0.0, 30.0));
    field.advance();

    assert!(field.particles()[index].velocity.y < p.velocity.y);
}

#[test]
fn ripple_decays_to_exact_intensity() {
    let mut field = field(6);
    field.trigger_ripple(Vec2::new(100.0, 580.0));
    field.advance();
    assert!((field.ripple().intensity - 7.84).abs() < 1e-5);
}

#[test]
fn ripple_dies_after_fixed_step_count() {
    let mut field = field(7);
    field.trigger_ripple(Vec2::new(100.0, 580.0));
    for _ in 0..216 {
        field.advance();
    }
    assert!(field.ripple().active);
    field.advance();
    assert!(!field.ripple().active);
}

#[test]
fn ripple_disturbs_nearby_particles_only() {
    let mut field = field(8);
    field.trigger_ripple(Vec2::new(100.0, 580.0));
    for _ in 0..5 {
        field.advance();
    }

    let far = field
        .particles()
        .iter()
        .filter(|p| p.position.x > 500.0)
        .map(|p| p.velocity.x.abs())
        .fold(0.0f32, f32::max);
    let near = field
        .particles()
        .iter()
        .filter(|p| p.position.x < 200.0)
        .map(|p| p.velocity.x.abs())
        .fold(0.0f32, f32::max);

    assert_eq!(far, 0.0);
    assert!(near > 0.1);
}

#[test]
fn second_trigger_replaces_first() {
    let mut field = field(9);
    field.trigger_ripple(Vec2::new(100.0, 580.0));
    for _ in 0..10 {
        field.advance();
    }
    field.trigger_ripple(Vec2::new(700.0, 580.0));

    let ripple = field.ripple();
    assert!(ripple.active);
    assert_eq!(ripple.origin, Vec2::new(700.0, 580.0));
    assert_eq!(ripple.intensity, 8.0);
    assert_eq!(ripple.elapsed, 0.0);
}

#[test]
fn heavy_forcing_never_sinks_below_floor() {
    let mut field = field(10);
    let floor = HEIGHT as f32 - field.config().floor_offset;
    for i in 0..300 {
        if i % 40 == 0 {
            field.trigger_ripple(Vec2::new((i * 3) as f32, 590.0));
        }
        field.set_attraction_target(Vec2::new(400.0, 599.0));
        field.advance();
        for p in field.particles() {
            assert!(p.position.y <= floor);
            assert!(p.position.x >= 0.0 && p.position.x <= WIDTH as f32);
            assert!(p.position.is_finite() && p.velocity.is_finite());
        }
    }
}

#[test]
fn hover_highlights_nearby_glyphs() {
    let mut field = field(11);
    field.advance();

    let mut plain = DisplayList::new(WIDTH, HEIGHT);
    field.render(&mut plain);
    let cyan = Rgba::from_rgb8(0, 255, 255, 0.95);
    assert!(plain.glyphs().all(|(_, _, color)| color != cyan));

    field.set_attraction_target(Vec2::new(400.0, 560.0));
    let mut hovered = DisplayList::new(WIDTH, HEIGHT);
    field.render(&mut hovered);
    assert!(hovered.glyphs().any(|(_, _, color)| color == cyan));
}

#[test]
fn render_starts_with_background() {
    let field = field(12);
    let mut list = DisplayList::new(WIDTH, HEIGHT);
    field.render(&mut list);
    assert!(matches!(list.commands().first(), Some(DrawCommand::Gradient(stops)) if stops.len() == 4));
    assert_eq!(list.commands().len(), field.particles().len() + 1);
}

#[test]
fn canvas_frame_has_pool_pixels() {
    let mut field = field(13);
    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    field.advance();
    field.render(&mut canvas);

    // Sky near the top is untouched gradient; the pool band carries glyph ink.
    let top = canvas.pixel(400, 2).unwrap();
    assert!(top.b < 0.25);
    let ink = (0..WIDTH)
        .filter(|&x| {
            let px = canvas.pixel(x, 500).unwrap();
            px.g > 0.45
        })
        .count();
    assert!(ink > 0);
}

#[test]
fn nav_click_ripples_from_control_centre() {
    let mut field = field(14);
    let mut nav = NavBar::new();
    nav.layout(WIDTH, HEIGHT, &mut field);

    let control = nav.controls()[0];
    nav.pointer_moved(control.center(), &mut field);
    assert_eq!(field.attraction_target(), Some(control.center()));

    let now = std::time::Instant::now();
    assert!(nav.click(control.center(), now, &mut field));
    assert_eq!(field.ripple().origin, control.center());
    assert_eq!(nav.poll(now + tidepool::nav::SWITCH_DELAY), Some(Section::Creative));
}
