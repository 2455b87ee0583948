pub mod config;
pub mod constants;
pub mod engine;
pub mod palette;
pub mod particles;
pub mod render;
pub mod schedule;
pub mod surface;
pub mod waves;

pub use config::*;
pub use engine::*;
pub use palette::*;
pub use particles::*;
pub use render::*;
pub use schedule::*;
pub use surface::*;
pub use waves::*;
