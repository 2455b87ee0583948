pub mod lifecycle;
pub mod pointer;
pub mod toggle;

pub use lifecycle::{wire_resize, wire_visibility};
pub use pointer::wire_input_handlers;
pub use toggle::wire_mode_toggle;
