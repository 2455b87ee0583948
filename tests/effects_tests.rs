// Host-side tests for the pointer-effect transform math.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod math {
    include!("../src/effects/math.rs");
}

use math::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn tilt_is_flat_at_center_and_maxed_at_corners() {
    let t = tilt_at(100.0, 50.0, 200.0, 100.0, TILT_MAX_DEG);
    assert!(close(t.rx, 0.0) && close(t.ry, 0.0));

    // Top-left corner: top edge towards the viewer, left edge away
    let t = tilt_at(0.0, 0.0, 200.0, 100.0, TILT_MAX_DEG);
    assert!(close(t.rx, 4.0) && close(t.ry, -4.0));

    let t = tilt_at(200.0, 100.0, 200.0, 100.0, TILT_MAX_DEG);
    assert!(close(t.rx, -4.0) && close(t.ry, 4.0));
}

#[test]
fn tilt_on_empty_box_is_neutral() {
    assert_eq!(tilt_at(5.0, 5.0, 0.0, 100.0, TILT_MAX_DEG), Tilt::default());
}

#[test]
fn tilt_css_uses_perspective_and_degrees() {
    let css = tilt_css(Tilt { rx: 4.0, ry: -1.5 });
    assert_eq!(
        css,
        "perspective(900px) rotateX(4.00deg) rotateY(-1.50deg) translateZ(0)"
    );
    assert!(TILT_RESET.starts_with("perspective(900px)"));
}

#[test]
fn magnet_follows_pointer_offset_from_center() {
    let p = magnet_at(50.0, 25.0, 100.0, 50.0, MAGNET_STRENGTH_PX, MAGNET_ROTATE_DEG);
    assert_eq!(p, MagnetPose::default());

    // Right edge, vertically centered
    let p = magnet_at(100.0, 25.0, 100.0, 50.0, MAGNET_STRENGTH_PX, MAGNET_ROTATE_DEG);
    assert!(close(p.tx, 22.0) && close(p.ty, 0.0));
    assert!(close(p.ry, 6.0) && close(p.rx, 0.0));

    // Bottom edge tilts back
    let p = magnet_at(50.0, 50.0, 100.0, 50.0, MAGNET_STRENGTH_PX, MAGNET_ROTATE_DEG);
    assert!(close(p.ty, 22.0) && close(p.rx, -6.0));
}

#[test]
fn magnet_css_formats_translate_and_rotation() {
    let css = magnet_css(MagnetPose {
        tx: 11.0,
        ty: -2.0,
        rx: 1.0,
        ry: 3.0,
    });
    assert_eq!(
        css,
        "translate(11.00px, -2.00px) rotateX(1.00deg) rotateY(3.00deg)"
    );
}

#[test]
fn ripple_box_is_square_and_centered_on_click() {
    let b = ripple_box(30.0, 10.0, 120.0, 40.0);
    assert_eq!(b.size, 120.0);
    assert_eq!(b.left, -30.0);
    assert_eq!(b.top, -50.0);
}
