//! Ambient point masses drifting over the backdrop.

use crate::config::EngineConfig;
use crate::constants::MIN_DISTANCE;
use crate::waves::Wave;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Population for a surface of `width × height` device pixels.
#[inline]
pub fn population_for(width: f32, height: f32, config: &EngineConfig) -> usize {
    let raw = (width.max(0.0) * height.max(0.0) / config.area_per_particle).round() as usize;
    raw.clamp(config.min_particles, config.max_particles)
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    bounds: Vec2,
    ratio: f32,
    band: f32,
    push: f32,
    torque: f32,
    drift_ceiling: f32,
    damping: f32,
}

impl ParticleField {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            particles: Vec::new(),
            bounds: Vec2::ZERO,
            ratio: 1.0,
            band: config.wave_band,
            push: config.wave_push,
            torque: config.wave_torque,
            drift_ceiling: config.particle_speed * std::f32::consts::SQRT_2,
            damping: config.excess_speed_damping,
        }
    }

    /// Replace the whole population for a new surface size.
    pub fn reinitialize<R: Rng>(
        &mut self,
        width: f32,
        height: f32,
        ratio: f32,
        config: &EngineConfig,
        rng: &mut R,
    ) {
        let count = population_for(width, height, config);
        let speed = config.particle_speed * ratio;
        let (rmin, rmax) = config.particle_radius;

        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        self.ratio = ratio;
        self.drift_ceiling = config.particle_speed * std::f32::consts::SQRT_2;
        self.damping = config.excess_speed_damping;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                pos: Vec2::new(
                    rng.gen::<f32>() * self.bounds.x,
                    rng.gen::<f32>() * self.bounds.y,
                ),
                vel: Vec2::new(rng.gen_range(-speed..=speed), rng.gen_range(-speed..=speed)),
                radius: rng.gen_range(rmin..=rmax) * ratio,
            });
        }
        log::debug!(
            "[particles] reinitialized {} particles on {}x{}",
            count,
            width,
            height
        );
    }

    /// One simulation step: wave edge forces, integration, wall reflection.
    pub fn advance(&mut self, waves: &[Wave]) {
        let band = self.band * self.ratio;
        let push = self.push * self.ratio;
        let ceiling = self.drift_ceiling * self.ratio;
        let torque = self.torque;
        let damping = self.damping;
        let bounds = self.bounds;

        for p in self.particles.iter_mut() {
            for w in waves {
                let delta = p.pos - w.origin;
                let dist = delta.length().max(MIN_DISTANCE);
                let edge = (dist - w.radius).abs();
                if edge < band {
                    let force = (1.0 - edge / band) * push;
                    let normal = delta / dist;
                    p.vel += normal * force + normal.perp() * (force * torque);
                }
            }

            if p.vel.length() > ceiling {
                p.vel *= damping;
            }

            p.pos += p.vel;
            reflect(p, bounds);
        }
    }

    /// One-time outward push around `center`, scaled by proximity.
    pub fn impulse(&mut self, center: Vec2, radius: f32, strength: f32) {
        if radius <= 0.0 {
            return;
        }
        for p in self.particles.iter_mut() {
            let delta = p.pos - center;
            let dist = delta.length();
            if dist < radius {
                let d = dist.max(MIN_DISTANCE);
                let k = 1.0 - dist / radius;
                p.vel += delta / d * (k * strength);
            }
        }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[inline]
fn reflect(p: &mut Particle, bounds: Vec2) {
    if p.pos.x < 0.0 {
        p.pos.x = 0.0;
        p.vel.x = p.vel.x.abs();
    } else if p.pos.x > bounds.x {
        p.pos.x = bounds.x;
        p.vel.x = -p.vel.x.abs();
    }
    if p.pos.y < 0.0 {
        p.pos.y = 0.0;
        p.vel.y = p.vel.y.abs();
    } else if p.pos.y > bounds.y {
        p.pos.y = bounds.y;
        p.vel.y = -p.vel.y.abs();
    }
}
