//! Frame composition, independent of the drawing backend.
//!
//! Passes, in order:
//! 1. Clear the full surface
//! 2. Rings, additive blend
//! 3. Particle dots
//! 4. Proximity links (particles mode only), capped per frame

use crate::engine::VisualMode;
use crate::palette::{Palette, Tone};
use crate::particles::Particle;
use crate::waves::Wave;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Normal,
    /// Canvas "lighter" compositing.
    Additive,
}

/// Minimal immediate-mode 2D drawing backend.
pub trait DrawSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn set_blend(&mut self, blend: Blend);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: &str, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str, alpha: f32);
}

/// What one frame drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub waves: usize,
    pub particles: usize,
    pub links: usize,
}

/// Everything a frame needs besides the backend.
pub struct FrameInput<'a> {
    pub size: Vec2,
    pub ratio: f32,
    pub particles: &'a [Particle],
    pub waves: &'a [Wave],
    pub mode: VisualMode,
    pub palette: &'a Palette,
    pub dot_alpha: f32,
    /// Device pixels.
    pub link_distance: f32,
    pub link_alpha_max: f32,
    /// Logical width, scaled by `ratio` when drawn.
    pub link_width: f32,
    pub max_lines: usize,
}

pub fn render_frame<S: DrawSurface>(surface: &mut S, frame: &FrameInput<'_>) -> FrameStats {
    surface.clear(frame.size.x, frame.size.y);

    let mut stats = FrameStats {
        waves: draw_waves(surface, frame.waves, frame.palette),
        ..Default::default()
    };
    stats.particles = draw_particles(surface, frame.particles, frame.palette, frame.dot_alpha);
    if frame.mode == VisualMode::Particles {
        stats.links = draw_links(
            surface,
            frame.particles,
            frame.palette.color(Tone::BrandSecondary),
            frame.link_distance,
            frame.link_alpha_max,
            frame.link_width * frame.ratio,
            frame.max_lines,
        );
    }
    stats
}

/// Reduced-motion pass: dots only, drawn once.
pub fn render_static<S: DrawSurface>(
    surface: &mut S,
    size: Vec2,
    particles: &[Particle],
    palette: &Palette,
    dot_alpha: f32,
) -> FrameStats {
    surface.clear(size.x, size.y);
    FrameStats {
        particles: draw_particles(surface, particles, palette, dot_alpha),
        ..Default::default()
    }
}

fn draw_waves<S: DrawSurface>(surface: &mut S, waves: &[Wave], palette: &Palette) -> usize {
    if waves.is_empty() {
        return 0;
    }
    surface.set_blend(Blend::Additive);
    for w in waves {
        surface.stroke_circle(
            w.origin,
            w.radius,
            w.line_width(),
            palette.color(w.tone),
            w.alpha,
        );
    }
    surface.set_blend(Blend::Normal);
    waves.len()
}

fn draw_particles<S: DrawSurface>(
    surface: &mut S,
    particles: &[Particle],
    palette: &Palette,
    alpha: f32,
) -> usize {
    let color = palette.color(Tone::Brand);
    for p in particles {
        surface.fill_circle(p.pos, p.radius, color, alpha);
    }
    particles.len()
}

/// Links every close pair, comparing squared distances. Stops at `max_lines`.
pub fn draw_links<S: DrawSurface>(
    surface: &mut S,
    particles: &[Particle],
    color: &str,
    link_distance: f32,
    alpha_max: f32,
    width: f32,
    max_lines: usize,
) -> usize {
    let max_d2 = link_distance * link_distance;
    if max_lines == 0 || max_d2 <= 0.0 {
        return 0;
    }
    let mut drawn = 0;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let d2 = a.pos.distance_squared(b.pos);
            if d2 < max_d2 {
                let alpha = alpha_max * (1.0 - d2 / max_d2);
                surface.line(a.pos, b.pos, width, color, alpha);
                drawn += 1;
                if drawn >= max_lines {
                    return drawn;
                }
            }
        }
    }
    drawn
}
