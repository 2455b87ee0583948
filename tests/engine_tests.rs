// Host-side tests for the engine: surface configuration, input, loop state.

mod support;

use backdrop_core::{LoopState, Tone, VisibilityAction, VisualMode};
use glam::Vec2;
use support::{engine_with, Recorder};

#[test]
fn configure_caps_pixel_ratio_and_sizes_in_device_pixels() {
    let mut engine = engine_with(VisualMode::Waves, false);
    assert!(engine.configure(800.0, 600.0, 3.0));
    let s = engine.surface();
    assert_eq!(s.ratio, 1.8);
    assert_eq!((s.width, s.height), (1440, 1080));
    assert_eq!(s.logical, Vec2::new(800.0, 600.0));
    assert_eq!(engine.particles().bounds(), Vec2::new(1440.0, 1080.0));
    assert!((engine.link_distance() - 110.0 * 1.8).abs() < 1e-3);
}

#[test]
fn configure_is_idempotent_for_unchanged_geometry() {
    let mut engine = engine_with(VisualMode::Waves, false);
    assert!(engine.configure(1024.0, 768.0, 2.0));
    let before = engine.particles().particles.clone();

    // Same inputs, and a higher ratio that caps to the same value
    assert!(!engine.configure(1024.0, 768.0, 2.0));
    assert!(!engine.configure(1024.0, 768.0, 2.5));
    assert_eq!(engine.particles().particles, before);

    assert!(engine.configure(1280.0, 768.0, 2.0));
}

#[test]
fn bad_pixel_ratio_falls_back_to_one() {
    let mut engine = engine_with(VisualMode::Waves, false);
    engine.configure(300.0, 200.0, f64::NAN);
    assert_eq!(engine.surface().ratio, 1.0);
    assert_eq!((engine.surface().width, engine.surface().height), (300, 200));
}

#[test]
fn client_coordinates_map_to_device_pixels() {
    let mut engine = engine_with(VisualMode::Waves, false);
    engine.configure(800.0, 600.0, 1.5);
    assert_eq!(engine.surface().to_device(100.0, 40.0), Vec2::new(150.0, 60.0));
}

#[test]
fn toggling_twice_restores_mode_label_and_attribute() {
    let mut engine = engine_with(VisualMode::Waves, false);
    let (label, attr) = (engine.mode().label(), engine.mode().as_attr());

    assert_eq!(engine.toggle_mode(), VisualMode::Particles);
    assert_ne!(engine.mode().label(), label);
    assert_eq!(engine.toggle_mode(), VisualMode::Waves);
    assert_eq!(engine.mode().label(), label);
    assert_eq!(engine.mode().as_attr(), attr);

    assert_eq!(VisualMode::from_attr("particles"), Some(VisualMode::Particles));
    assert_eq!(VisualMode::from_attr(" waves "), Some(VisualMode::Waves));
    assert_eq!(VisualMode::from_attr("sparkles"), None);
}

#[test]
fn pointer_down_spawns_mode_colored_wave_and_pushes_neighbors() {
    let mut engine = engine_with(VisualMode::Particles, false);
    engine.configure(800.0, 600.0, 1.0);
    {
        let ps = &mut engine.particles_mut().particles;
        ps.truncate(2);
        ps[0].pos = Vec2::new(410.0, 300.0);
        ps[0].vel = Vec2::ZERO;
        ps[1].pos = Vec2::new(700.0, 300.0);
        ps[1].vel = Vec2::ZERO;
    }

    engine.pointer_down(Vec2::new(400.0, 300.0));

    assert!(engine.pointer().pressed);
    assert_eq!(engine.waves().len(), 1);
    let tone = engine.waves().waves()[0].tone;
    assert!(matches!(tone, Tone::BrandSecondary | Tone::Accent));
    assert!(engine.particles().particles[0].vel.x > 0.0);
    assert_eq!(engine.particles().particles[1].vel, Vec2::ZERO);

    engine.pointer_up();
    assert!(!engine.pointer().pressed);
    assert_eq!(engine.waves().len(), 1, "release has no simulation effect");
}

#[test]
fn waves_mode_picks_brand_tones() {
    let mut engine = engine_with(VisualMode::Waves, false);
    engine.configure(800.0, 600.0, 1.0);
    for i in 0..20 {
        engine.pointer_down(Vec2::new(i as f32 * 10.0, 100.0));
    }
    assert!(engine
        .waves()
        .waves()
        .iter()
        .all(|w| matches!(w.tone, Tone::Brand | Tone::BrandSecondary)));
}

#[test]
fn pointer_move_only_records_position() {
    let mut engine = engine_with(VisualMode::Waves, false);
    engine.configure(800.0, 600.0, 1.0);
    let before = engine.particles().particles.clone();
    engine.pointer_move(Vec2::new(12.0, 34.0));
    assert_eq!(engine.pointer().pos, Vec2::new(12.0, 34.0));
    assert!(!engine.pointer().pressed);
    assert!(engine.waves().is_empty());
    assert_eq!(engine.particles().particles, before);
}

#[test]
fn loop_starts_once_and_follows_visibility() {
    let mut engine = engine_with(VisualMode::Waves, false);
    engine.configure(800.0, 600.0, 1.0);
    assert_eq!(engine.loop_state(), LoopState::Stopped);

    assert!(engine.start());
    assert!(!engine.start(), "already running, no second frame chain");
    assert_eq!(engine.loop_state(), LoopState::Running);

    assert_eq!(engine.on_visibility(true), VisibilityAction::CancelFrame);
    assert_eq!(engine.loop_state(), LoopState::Stopped);
    assert_eq!(engine.on_visibility(true), VisibilityAction::Nothing);

    let mut rec = Recorder::default();
    assert!(engine.frame(&mut rec).is_none());
    assert!(rec.ops.is_empty());

    assert_eq!(engine.on_visibility(false), VisibilityAction::ScheduleFrame);
    assert!(engine.frame(&mut rec).is_some());
    assert!(engine.should_reschedule());
}

#[test]
fn frame_advances_then_renders() {
    let mut engine = engine_with(VisualMode::Waves, false);
    engine.configure(800.0, 600.0, 1.0);
    engine.start();
    engine.pointer_down(Vec2::new(400.0, 300.0));

    let mut rec = Recorder::default();
    let stats = engine.frame(&mut rec).expect("running");
    assert_eq!(stats.waves, 1);
    assert_eq!(stats.particles, engine.particles().len());
    // The ring grew before it was drawn
    assert!(engine.waves().waves()[0].radius > 0.0);
    assert_eq!(rec.strokes(), 1);
}

#[test]
fn reduced_motion_never_runs_and_renders_one_static_pass() {
    let mut engine = engine_with(VisualMode::Particles, true);
    engine.configure(800.0, 600.0, 1.0);
    engine.pointer_down(Vec2::new(100.0, 100.0));

    assert!(!engine.start());
    assert_eq!(engine.on_visibility(false), VisibilityAction::Nothing);
    assert_eq!(engine.loop_state(), LoopState::Stopped);

    let mut rec = Recorder::default();
    assert!(engine.frame(&mut rec).is_none());

    let stats = engine.render_static(&mut rec);
    assert_eq!(stats.particles, engine.particles().len());
    assert_eq!(rec.strokes(), 0, "no rings");
    assert_eq!(rec.lines(), 0, "no links");
    assert_eq!(rec.fills(), engine.particles().len());
}
