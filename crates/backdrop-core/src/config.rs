use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive and finite (got {value})")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} range is inverted ({min} > {max})")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("wave alpha decay must be in (0, 1] (got {0})")]
    AlphaDecay(f32),
    #[error("particle population bounds are inverted ({min} > {max})")]
    Population { min: usize, max: usize },
    #[error("{name} must be in (0, 1] (got {value})")]
    Fraction { name: &'static str, value: f32 },
}

/// Every tunable the engine reads. `Default` mirrors `constants.rs`.
/// `MIN_DISTANCE` is a numeric guard against division by zero, not a
/// tunable, and stays a constant.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub pixel_ratio_cap: f32,

    pub area_per_particle: f32,
    pub min_particles: usize,
    pub max_particles: usize,
    pub particle_speed: f32,
    pub particle_radius: (f32, f32),
    /// Applied each frame while a particle is faster than its ambient drift.
    pub excess_speed_damping: f32,

    pub wave_band: f32,
    pub wave_push: f32,
    pub wave_torque: f32,

    pub wave_alpha_start: f32,
    pub wave_alpha_decay: f32,
    pub wave_alpha_min: f32,
    pub wave_reach: f32,
    pub wave_speed: f32,
    pub wave_stroke: f32,

    pub click_radius: f32,
    pub click_push: f32,

    pub particle_alpha: f32,
    pub link_distance: f32,
    pub link_alpha_max: f32,
    pub link_width: f32,
    pub max_lines_per_frame: usize,

    pub resize_debounce_ms: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pixel_ratio_cap: PIXEL_RATIO_CAP,
            area_per_particle: AREA_PER_PARTICLE,
            min_particles: MIN_PARTICLES,
            max_particles: MAX_PARTICLES,
            particle_speed: PARTICLE_SPEED,
            particle_radius: (PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX),
            excess_speed_damping: EXCESS_SPEED_DAMPING,
            wave_band: WAVE_BAND,
            wave_push: WAVE_PUSH,
            wave_torque: WAVE_TORQUE,
            wave_alpha_start: WAVE_ALPHA_START,
            wave_alpha_decay: WAVE_ALPHA_DECAY,
            wave_alpha_min: WAVE_ALPHA_MIN,
            wave_reach: WAVE_REACH,
            wave_speed: WAVE_SPEED,
            wave_stroke: WAVE_STROKE,
            click_radius: CLICK_RADIUS,
            click_push: CLICK_PUSH,
            particle_alpha: PARTICLE_ALPHA,
            link_distance: LINK_DISTANCE,
            link_alpha_max: LINK_ALPHA_MAX,
            link_width: LINK_WIDTH,
            max_lines_per_frame: MAX_LINES_PER_FRAME,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn fraction(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Fraction { name, value })
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("pixel_ratio_cap", self.pixel_ratio_cap)?;
        positive("area_per_particle", self.area_per_particle)?;
        if self.min_particles > self.max_particles {
            return Err(ConfigError::Population {
                min: self.min_particles,
                max: self.max_particles,
            });
        }
        let (rmin, rmax) = self.particle_radius;
        positive("particle_radius.min", rmin)?;
        if rmin > rmax {
            return Err(ConfigError::InvertedRange {
                name: "particle_radius",
                min: rmin,
                max: rmax,
            });
        }
        fraction("excess_speed_damping", self.excess_speed_damping)?;
        positive("wave_band", self.wave_band)?;
        positive("wave_alpha_start", self.wave_alpha_start)?;
        if !(self.wave_alpha_decay > 0.0 && self.wave_alpha_decay <= 1.0) {
            return Err(ConfigError::AlphaDecay(self.wave_alpha_decay));
        }
        positive("wave_reach", self.wave_reach)?;
        positive("wave_speed", self.wave_speed)?;
        positive("wave_stroke", self.wave_stroke)?;
        positive("click_radius", self.click_radius)?;
        fraction("particle_alpha", self.particle_alpha)?;
        positive("link_distance", self.link_distance)?;
        fraction("link_alpha_max", self.link_alpha_max)?;
        positive("link_width", self.link_width)?;
        Ok(())
    }
}
