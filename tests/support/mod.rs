// Shared helpers for the host-side tests.

#![allow(dead_code)]

use backdrop_core::{Blend, DrawSurface, Engine, EngineConfig, Palette, VisualMode};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Blend(Blend),
    Stroke { radius: f32, width: f32, alpha: f32 },
    Fill { alpha: f32 },
    Line { alpha: f32 },
}

/// Draw backend that only records what was asked of it.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
    pub fn strokes(&self) -> usize {
        self.count(|op| matches!(op, Op::Stroke { .. }))
    }
    pub fn fills(&self) -> usize {
        self.count(|op| matches!(op, Op::Fill { .. }))
    }
    pub fn lines(&self) -> usize {
        self.count(|op| matches!(op, Op::Line { .. }))
    }
}

impl DrawSurface for Recorder {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.ops.push(Op::Clear);
    }
    fn set_blend(&mut self, blend: Blend) {
        self.ops.push(Op::Blend(blend));
    }
    fn stroke_circle(&mut self, _c: Vec2, radius: f32, width: f32, _color: &str, alpha: f32) {
        self.ops.push(Op::Stroke {
            radius,
            width,
            alpha,
        });
    }
    fn fill_circle(&mut self, _c: Vec2, _radius: f32, _color: &str, alpha: f32) {
        self.ops.push(Op::Fill { alpha });
    }
    fn line(&mut self, _a: Vec2, _b: Vec2, _width: f32, _color: &str, alpha: f32) {
        self.ops.push(Op::Line { alpha });
    }
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn engine_with(mode: VisualMode, reduced_motion: bool) -> Engine {
    Engine::new(
        EngineConfig::default(),
        Palette::default(),
        mode,
        reduced_motion,
        rng(),
    )
    .expect("default config is valid")
}
