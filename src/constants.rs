// DOM hooks and timings used by the web frontend.

// Backdrop
pub const CANVAS_ID: &str = "fx-canvas"; // created when absent
pub const TOGGLE_ID: &str = "fx-toggle"; // optional mode switch
pub const CANVAS_STYLE: &str =
    "position:fixed;inset:0;z-index:-1;pointer-events:none;display:block;";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Frame statistics are logged at debug level this often
pub const STATS_INTERVAL_SEC: f32 = 1.0;

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.18;

// Pointer effects
pub const TILT_SELECTOR: &str = ".tilt";
pub const MAGNET_SELECTOR: &str = ".magnet";
pub const MAGNET_TARGET_SELECTOR: &str = ".magnet__target";

// Click ripple
pub const RIPPLE_SELECTOR: &str = "[data-ripple]";
pub const RIPPLE_CLASS: &str = "ripple";
pub const RIPPLE_LIFETIME_MS: i32 = 600;
