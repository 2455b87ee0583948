//! `CanvasRenderingContext2d` backend for the frame renderer.

use backdrop_core::{Blend, DrawSurface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Canvas2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    /// `None` when the browser cannot hand out a 2D context.
    pub fn new(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl DrawSurface for Canvas2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_blend(&mut self, blend: Blend) {
        let op = match blend {
            Blend::Normal => "source-over",
            Blend::Additive => "lighter",
        };
        _ = self.ctx.set_global_composite_operation(op);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: &str, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
