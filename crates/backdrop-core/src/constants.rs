// Tuning constants for the backdrop simulation.
//
// Distances and speeds marked "× ratio" are multiplied by the capped device
// pixel ratio at the point of use so the look is the same on dense displays.

// Surface
pub const PIXEL_RATIO_CAP: f32 = 1.8; // bounds fill cost on very dense displays

// Particle population: one particle per AREA_PER_PARTICLE square device px
pub const AREA_PER_PARTICLE: f32 = 16_000.0;
pub const MIN_PARTICLES: usize = 40;
pub const MAX_PARTICLES: usize = 90;

// Particle motion (× ratio)
pub const PARTICLE_SPEED: f32 = 0.18; // per-axis drift bound, px/frame
pub const PARTICLE_RADIUS_MIN: f32 = 0.8;
pub const PARTICLE_RADIUS_MAX: f32 = 2.0;
pub const EXCESS_SPEED_DAMPING: f32 = 0.96; // applied only above the drift ceiling

// Wave/particle coupling (× ratio)
pub const WAVE_BAND: f32 = 80.0; // half-width of the ring edge that pushes particles
pub const WAVE_PUSH: f32 = 0.045;
pub const WAVE_TORQUE: f32 = 0.12; // perpendicular share of the push

// Waves
pub const WAVE_ALPHA_START: f32 = 0.33;
pub const WAVE_ALPHA_DECAY: f32 = 0.985; // multiplicative, per frame
pub const WAVE_ALPHA_MIN: f32 = 0.02; // removed below this
pub const WAVE_REACH: f32 = 0.6; // max radius as a share of the surface diagonal
pub const WAVE_SPEED: f32 = 5.5; // × ratio, px/frame
pub const WAVE_STROKE: f32 = 2.2; // × ratio

// Click impulse
pub const CLICK_RADIUS: f32 = 180.0; // device px
pub const CLICK_PUSH: f32 = 1.6; // × ratio

// Rendering
pub const PARTICLE_ALPHA: f32 = 0.65;
pub const LINK_DISTANCE: f32 = 110.0; // × ratio
pub const LINK_ALPHA_MAX: f32 = 0.35;
pub const LINK_WIDTH: f32 = 1.0; // × ratio
pub const MAX_LINES_PER_FRAME: usize = 260;

// Guard for direction vectors between coincident points
pub const MIN_DISTANCE: f32 = 1e-3;

// Resize handling
pub const RESIZE_DEBOUNCE_MS: i32 = 150;
