//! Drawing-surface geometry.
//!
//! The surface is sized in device pixels (`round(viewport × ratio)`) while
//! its display size stays at the logical viewport size. The ratio is the
//! device pixel ratio capped at `pixel_ratio_cap`.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
    /// Logical (CSS px) viewport size.
    pub logical: Vec2,
    /// Capped pixel ratio applied to everything drawn.
    pub ratio: f32,
    /// Backing store size in device pixels.
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self {
            logical: Vec2::ZERO,
            ratio: 1.0,
            width: 0,
            height: 0,
        }
    }
}

#[inline]
pub fn capped_ratio(device_pixel_ratio: f64, cap: f32) -> f32 {
    let dpr = device_pixel_ratio as f32;
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(cap)
    } else {
        1.0
    }
}

impl SurfaceGeometry {
    pub fn new(viewport_w: f64, viewport_h: f64, device_pixel_ratio: f64, cap: f32) -> Self {
        let ratio = capped_ratio(device_pixel_ratio, cap);
        let lw = viewport_w.max(0.0) as f32;
        let lh = viewport_h.max(0.0) as f32;
        Self {
            logical: Vec2::new(lw, lh),
            ratio,
            width: ((lw * ratio).round() as u32).max(1),
            height: ((lh * ratio).round() as u32).max(1),
        }
    }

    /// Recompute for new viewport inputs. Returns `false` (and leaves the
    /// geometry untouched) when nothing changed.
    pub fn configure(
        &mut self,
        viewport_w: f64,
        viewport_h: f64,
        device_pixel_ratio: f64,
        cap: f32,
    ) -> bool {
        let next = Self::new(viewport_w, viewport_h, device_pixel_ratio, cap);
        if next == *self {
            return false;
        }
        *self = next;
        true
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }

    /// Logical (client) coordinates to device pixels.
    #[inline]
    pub fn to_device(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(x as f32 * self.ratio, y as f32 * self.ratio)
    }
}
