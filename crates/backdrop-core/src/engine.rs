use crate::config::{ConfigError, EngineConfig};
use crate::palette::{Palette, Tone};
use crate::particles::ParticleField;
use crate::render::{self, DrawSurface, FrameInput, FrameStats};
use crate::schedule::{LoopController, LoopState, VisibilityAction};
use crate::surface::SurfaceGeometry;
use crate::waves::WaveField;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Selects whether particle links are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualMode {
    #[default]
    Waves,
    Particles,
}

impl VisualMode {
    pub fn toggled(self) -> Self {
        match self {
            VisualMode::Waves => VisualMode::Particles,
            VisualMode::Particles => VisualMode::Waves,
        }
    }

    /// Value of the toggle control's `data-mode` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            VisualMode::Waves => "waves",
            VisualMode::Particles => "particles",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "waves" => Some(VisualMode::Waves),
            "particles" => Some(VisualMode::Particles),
            _ => None,
        }
    }

    /// Text shown on the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            VisualMode::Waves => "Mode: waves",
            VisualMode::Particles => "Mode: particles",
        }
    }

    /// The two tones a click in this mode picks from.
    pub fn wave_tones(self) -> [Tone; 2] {
        match self {
            VisualMode::Waves => [Tone::Brand, Tone::BrandSecondary],
            VisualMode::Particles => [Tone::BrandSecondary, Tone::Accent],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Last known position, device pixels.
    pub pos: Vec2,
    pub pressed: bool,
}

/// The backdrop engine: owns the surface geometry, both fields, and the loop
/// state. Inputs and the per-frame step are the only mutators.
pub struct Engine {
    pub config: EngineConfig,
    pub palette: Palette,
    surface: SurfaceGeometry,
    particles: ParticleField,
    waves: WaveField,
    mode: VisualMode,
    pointer: PointerState,
    looper: LoopController,
    rng: StdRng,
}

impl Engine {
    pub fn new(
        config: EngineConfig,
        palette: Palette,
        mode: VisualMode,
        reduced_motion: bool,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            particles: ParticleField::new(&config),
            waves: WaveField::from_config(&config),
            config,
            palette,
            surface: SurfaceGeometry::default(),
            mode,
            pointer: PointerState::default(),
            looper: LoopController::new(reduced_motion),
            rng,
        })
    }

    /// Resize to a viewport. Reinitializes the particles only when the
    /// geometry actually changed.
    pub fn configure(&mut self, viewport_w: f64, viewport_h: f64, device_pixel_ratio: f64) -> bool {
        let changed = self.surface.configure(
            viewport_w,
            viewport_h,
            device_pixel_ratio,
            self.config.pixel_ratio_cap,
        );
        if changed {
            let size = self.surface.size();
            self.particles.reinitialize(
                size.x,
                size.y,
                self.surface.ratio,
                &self.config,
                &mut self.rng,
            );
            log::info!(
                "[surface] {}x{} px (ratio {:.2}), {} particles",
                self.surface.width,
                self.surface.height,
                self.surface.ratio,
                self.particles.len()
            );
        }
        changed
    }

    /// Particles react to the current rings, then the rings grow and fade.
    pub fn step(&mut self) {
        self.particles.advance(self.waves.waves());
        self.waves.advance();
    }

    pub fn render<S: DrawSurface>(&self, surface: &mut S) -> FrameStats {
        render::render_frame(
            surface,
            &FrameInput {
                size: self.surface.size(),
                ratio: self.surface.ratio,
                particles: &self.particles.particles,
                waves: self.waves.waves(),
                mode: self.mode,
                palette: &self.palette,
                dot_alpha: self.config.particle_alpha,
                link_distance: self.link_distance(),
                link_alpha_max: self.config.link_alpha_max,
                link_width: self.config.link_width,
                max_lines: self.config.max_lines_per_frame,
            },
        )
    }

    pub fn render_static<S: DrawSurface>(&self, surface: &mut S) -> FrameStats {
        render::render_static(
            surface,
            self.surface.size(),
            &self.particles.particles,
            &self.palette,
            self.config.particle_alpha,
        )
    }

    /// Body of one animation frame. `None` when the loop is stopped.
    pub fn frame<S: DrawSurface>(&mut self, surface: &mut S) -> Option<FrameStats> {
        if !self.looper.on_frame() {
            return None;
        }
        self.step();
        Some(self.render(surface))
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        self.pointer.pos = pos;
    }

    /// Spawn a ring at `pos` and push nearby particles away from it.
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.pointer.pos = pos;
        self.pointer.pressed = true;

        let [a, b] = self.mode.wave_tones();
        let tone = if self.rng.gen_bool(0.5) { a } else { b };
        self.waves.spawn(pos, tone, &self.surface, &self.config);
        self.particles.impulse(
            pos,
            self.config.click_radius,
            self.config.click_push * self.surface.ratio,
        );
    }

    pub fn pointer_up(&mut self) {
        self.pointer.pressed = false;
    }

    pub fn toggle_mode(&mut self) -> VisualMode {
        self.mode = self.mode.toggled();
        log::info!("[engine] mode={}", self.mode.as_attr());
        self.mode
    }

    pub fn start(&mut self) -> bool {
        let scheduled = self.looper.start();
        if scheduled {
            log::info!("[loop] running");
        }
        scheduled
    }

    pub fn on_visibility(&mut self, hidden: bool) -> VisibilityAction {
        let action = self.looper.on_visibility(hidden);
        if action != VisibilityAction::Nothing {
            log::info!("[loop] hidden={} -> {:?}", hidden, self.looper.state());
        }
        action
    }

    pub fn should_reschedule(&self) -> bool {
        self.looper.should_reschedule()
    }

    pub fn loop_state(&self) -> LoopState {
        self.looper.state()
    }

    pub fn reduced_motion(&self) -> bool {
        self.looper.reduced_motion()
    }

    pub fn link_distance(&self) -> f32 {
        self.config.link_distance * self.surface.ratio
    }

    pub fn mode(&self) -> VisualMode {
        self.mode
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn surface(&self) -> &SurfaceGeometry {
        &self.surface
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut ParticleField {
        &mut self.particles
    }

    pub fn waves(&self) -> &WaveField {
        &self.waves
    }
}
