use crate::config::EngineConfig;
use crate::palette::Tone;
use crate::surface::SurfaceGeometry;
use glam::Vec2;
use smallvec::SmallVec;

/// One expanding, fading ring spawned by a click.
#[derive(Clone, Debug, PartialEq)]
pub struct Wave {
    pub origin: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub stroke_width: f32,
    pub speed: f32,
    pub alpha: f32,
    pub tone: Tone,
}

impl Wave {
    pub fn new(origin: Vec2, tone: Tone, surface: &SurfaceGeometry, config: &EngineConfig) -> Self {
        Self {
            origin,
            radius: 0.0,
            max_radius: config.wave_reach * surface.diagonal(),
            stroke_width: config.wave_stroke * surface.ratio,
            speed: config.wave_speed * surface.ratio,
            alpha: config.wave_alpha_start,
            tone,
        }
    }

    /// Stroke width narrowing towards 1 as the ring reaches its max radius.
    #[inline]
    pub fn line_width(&self) -> f32 {
        let t = if self.max_radius > 0.0 {
            (self.radius / self.max_radius).clamp(0.0, 1.0)
        } else {
            1.0
        };
        1.0 + (self.stroke_width - 1.0).max(0.0) * (1.0 - t)
    }
}

/// Active rings, kept in creation order.
#[derive(Clone, Debug)]
pub struct WaveField {
    waves: SmallVec<[Wave; 8]>,
    alpha_decay: f32,
    alpha_min: f32,
}

impl WaveField {
    pub fn new(alpha_decay: f32, alpha_min: f32) -> Self {
        Self {
            waves: SmallVec::new(),
            alpha_decay,
            alpha_min,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.wave_alpha_decay, config.wave_alpha_min)
    }

    pub fn spawn(
        &mut self,
        origin: Vec2,
        tone: Tone,
        surface: &SurfaceGeometry,
        config: &EngineConfig,
    ) {
        self.waves.push(Wave::new(origin, tone, surface, config));
    }

    pub fn push(&mut self, wave: Wave) {
        self.waves.push(wave);
    }

    /// Grow and fade every ring, then drop the expired ones in place.
    pub fn advance(&mut self) {
        let decay = self.alpha_decay;
        let alpha_min = self.alpha_min;
        for w in self.waves.iter_mut() {
            w.radius += w.speed;
            w.alpha *= decay;
        }
        self.waves
            .retain(|w| !(w.radius > w.max_radius || w.alpha < alpha_min));
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}
