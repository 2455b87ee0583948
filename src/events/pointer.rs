use crate::dom;
use backdrop_core::Engine;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Device-pixel position of a pointer event on the full-viewport surface.
#[inline]
fn device_pos(engine: &Engine, ev: &web::PointerEvent) -> glam::Vec2 {
    engine
        .surface()
        .to_device(ev.client_x() as f64, ev.client_y() as f64)
}

/// Pointer move/down/up/leave on the window feed the engine. The surface
/// itself ignores pointer events so page content stays clickable.
pub fn wire_input_handlers(engine: Rc<RefCell<Engine>>) {
    let Some(window) = web::window() else {
        return;
    };
    if engine.borrow().reduced_motion() {
        log::info!("[input] reduced motion, pointer effects off");
        return;
    }
    let target: &web::EventTarget = &window;

    let eng = engine.clone();
    dom::add_passive_listener(target, "pointermove", move |ev: web::PointerEvent| {
        let mut e = eng.borrow_mut();
        let pos = device_pos(&e, &ev);
        e.pointer_move(pos);
    });

    let eng = engine.clone();
    dom::add_passive_listener(target, "pointerdown", move |ev: web::PointerEvent| {
        let mut e = eng.borrow_mut();
        let pos = device_pos(&e, &ev);
        e.pointer_down(pos);
        log::debug!("[input] wave at ({:.0},{:.0}), {} active", pos.x, pos.y, e.waves().len());
    });

    for name in ["pointerup", "pointercancel"] {
        let eng = engine.clone();
        dom::add_passive_listener(target, name, move |_ev: web::PointerEvent| {
            eng.borrow_mut().pointer_up();
        });
    }

    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let eng = engine;
        dom::add_passive_listener(&root, "pointerleave", move |_ev: web::PointerEvent| {
            eng.borrow_mut().pointer_up();
        });
    }
}
