// Host-side tests for the wave field.

use backdrop_core::{EngineConfig, SurfaceGeometry, Tone, Wave, WaveField};
use glam::Vec2;

fn geometry() -> SurfaceGeometry {
    SurfaceGeometry::new(800.0, 600.0, 1.0, 1.8)
}

fn wave(speed: f32, max_radius: f32) -> Wave {
    Wave {
        origin: Vec2::ZERO,
        radius: 0.0,
        max_radius,
        stroke_width: 2.2,
        speed,
        alpha: 0.33,
        tone: Tone::Brand,
    }
}

#[test]
fn spawn_on_empty_field_yields_one_fresh_wave() {
    let config = EngineConfig::default();
    let mut field = WaveField::from_config(&config);
    field.spawn(Vec2::new(100.0, 100.0), Tone::Accent, &geometry(), &config);

    assert_eq!(field.len(), 1);
    let w = &field.waves()[0];
    assert_eq!(w.origin, Vec2::new(100.0, 100.0));
    assert_eq!(w.radius, 0.0);
    assert_eq!(w.alpha, 0.33);
    assert_eq!(w.tone, Tone::Accent);
    // 0.6 of the 800x600 diagonal
    assert!((w.max_radius - 600.0).abs() < 1e-3);
}

#[test]
fn radius_grows_and_alpha_fades_until_removal() {
    let config = EngineConfig::default();
    let mut field = WaveField::from_config(&config);
    field.spawn(Vec2::new(400.0, 300.0), Tone::Brand, &geometry(), &config);

    let (mut last_r, mut last_a) = (0.0_f32, 1.0_f32);
    let mut frames = 0;
    while let Some(w) = field.waves().first() {
        assert!(w.radius >= last_r, "radius shrank at frame {frames}");
        assert!(w.alpha <= last_a, "alpha grew at frame {frames}");
        last_r = w.radius;
        last_a = w.alpha;
        field.advance();
        frames += 1;
        assert!(frames < 10_000, "wave never expired");
    }
    assert!(field.is_empty());
}

#[test]
fn fast_wave_is_removed_by_radius_while_alpha_holds() {
    // No decay at all, so only the radius can retire it.
    let mut field = WaveField::new(1.0, 0.02);
    field.push(wave(60.0, 100.0));

    field.advance();
    assert_eq!(field.len(), 1);
    assert_eq!(field.waves()[0].radius, 60.0);
    assert_eq!(field.waves()[0].alpha, 0.33);

    field.advance(); // 120 > 100
    assert!(field.is_empty());
}

#[test]
fn slow_wave_is_removed_by_alpha_decay() {
    let mut field = WaveField::new(0.5, 0.02);
    field.push(wave(0.001, 1.0e6));

    // 0.33 -> 0.165 -> 0.0825 -> 0.04125 -> 0.020625
    for _ in 0..4 {
        field.advance();
    }
    assert_eq!(field.len(), 1);
    assert!(field.waves()[0].radius < field.waves()[0].max_radius);

    field.advance(); // 0.0103 < 0.02
    assert!(field.is_empty());
}

#[test]
fn removal_keeps_creation_order_of_survivors() {
    let mut field = WaveField::new(1.0, 0.02);
    let mut a = wave(1.0, 1_000.0);
    a.origin = Vec2::new(1.0, 0.0);
    let mut b = wave(50.0, 10.0); // expires on first advance
    b.origin = Vec2::new(2.0, 0.0);
    let mut c = wave(1.0, 1_000.0);
    c.origin = Vec2::new(3.0, 0.0);
    field.push(a);
    field.push(b);
    field.push(c);

    field.advance();
    let xs: Vec<f32> = field.waves().iter().map(|w| w.origin.x).collect();
    assert_eq!(xs, vec![1.0, 3.0]);
}

#[test]
fn line_width_narrows_to_one_at_max_radius() {
    let mut w = wave(1.0, 100.0);
    w.stroke_width = 4.0;
    assert!((w.line_width() - 4.0).abs() < 1e-6);
    w.radius = 50.0;
    assert!((w.line_width() - 2.5).abs() < 1e-6);
    w.radius = 100.0;
    assert!((w.line_width() - 1.0).abs() < 1e-6);
}
