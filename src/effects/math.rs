// Pure transform math for the pointer effects (no web APIs, host-testable).

pub const TILT_MAX_DEG: f64 = 8.0;
pub const TILT_PERSPECTIVE_PX: f64 = 900.0;
pub const MAGNET_STRENGTH_PX: f64 = 22.0;
pub const MAGNET_ROTATE_DEG: f64 = 6.0;

pub const TILT_RESET: &str = "perspective(900px) rotateX(0) rotateY(0)";
pub const MAGNET_RESET: &str = "translate(0,0) rotateX(0) rotateY(0)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rx: f64,
    pub ry: f64,
}

/// Tilt for a pointer at (`x`, `y`) inside a `w × h` box, both relative to
/// the box's top-left corner. Top edge tilts towards the viewer.
#[inline]
pub fn tilt_at(x: f64, y: f64, w: f64, h: f64, max_deg: f64) -> Tilt {
    if w <= 0.0 || h <= 0.0 {
        return Tilt::default();
    }
    let px = x / w;
    let py = y / h;
    Tilt {
        rx: max_deg / 2.0 - py * max_deg,
        ry: px * max_deg - max_deg / 2.0,
    }
}

pub fn tilt_css(t: Tilt) -> String {
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ(0)",
        TILT_PERSPECTIVE_PX, t.rx, t.ry
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MagnetPose {
    pub tx: f64,
    pub ty: f64,
    pub rx: f64,
    pub ry: f64,
}

/// Pull towards the pointer, proportional to its offset from the center.
#[inline]
pub fn magnet_at(x: f64, y: f64, w: f64, h: f64, strength: f64, rotate: f64) -> MagnetPose {
    if w <= 0.0 || h <= 0.0 {
        return MagnetPose::default();
    }
    let dx = (x - w / 2.0) / (w / 2.0);
    let dy = (y - h / 2.0) / (h / 2.0);
    MagnetPose {
        tx: dx * strength,
        ty: dy * strength,
        rx: -dy * rotate,
        ry: dx * rotate,
    }
}

pub fn magnet_css(p: MagnetPose) -> String {
    format!(
        "translate({:.2}px, {:.2}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        p.tx, p.ty, p.rx, p.ry
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleBox {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// Square ripple covering the control, centered on the click.
#[inline]
pub fn ripple_box(x: f64, y: f64, w: f64, h: f64) -> RippleBox {
    let size = w.max(h);
    RippleBox {
        size,
        left: x - size / 2.0,
        top: y - size / 2.0,
    }
}
