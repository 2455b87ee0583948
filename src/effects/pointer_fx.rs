use super::math::{
    magnet_at, magnet_css, tilt_at, tilt_css, MAGNET_RESET, MAGNET_ROTATE_DEG, MAGNET_STRENGTH_PX,
    TILT_MAX_DEG, TILT_RESET,
};
use super::select_all;
use crate::constants::{MAGNET_SELECTOR, MAGNET_TARGET_SELECTOR, TILT_SELECTOR};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Writes an element's `transform` at most once per animation frame, using
/// the latest value requested since the last write.
#[derive(Clone)]
struct TransformWriter {
    el: web::HtmlElement,
    latest: Rc<RefCell<Option<String>>>,
    handle: Rc<Cell<Option<i32>>>,
    cb: Rc<Closure<dyn FnMut()>>,
}

impl TransformWriter {
    fn new(el: web::HtmlElement) -> Self {
        let latest: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let (el_cb, latest_cb, handle_cb) = (el.clone(), latest.clone(), handle.clone());
        let cb = Closure::wrap(Box::new(move || {
            handle_cb.set(None);
            if let Some(t) = latest_cb.borrow_mut().take() {
                _ = el_cb.style().set_property("transform", &t);
            }
        }) as Box<dyn FnMut()>);
        Self {
            el,
            latest,
            handle,
            cb: Rc::new(cb),
        }
    }

    fn request(&self, transform: String) {
        *self.latest.borrow_mut() = Some(transform);
        if self.handle.get().is_some() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(h) = w.request_animation_frame((*self.cb).as_ref().unchecked_ref()) {
                self.handle.set(Some(h));
            }
        }
    }

    /// Drop any pending write and apply `transform` immediately.
    fn reset(&self, transform: &str) {
        if let Some(h) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(h);
            }
        }
        self.latest.borrow_mut().take();
        _ = self.el.style().set_property("transform", transform);
    }
}

/// `.tilt` cards rotate towards the pointer.
pub fn wire_tilt(document: &web::Document, reduced_motion: bool) {
    for el in select_all(document, TILT_SELECTOR) {
        let Ok(card) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let writer = TransformWriter::new(card.clone());

        let (w_move, card_move) = (writer.clone(), card.clone());
        dom::add_passive_listener(&card, "pointermove", move |ev: web::PointerEvent| {
            if reduced_motion {
                return;
            }
            let r = card_move.get_bounding_client_rect();
            let t = tilt_at(
                ev.client_x() as f64 - r.left(),
                ev.client_y() as f64 - r.top(),
                r.width(),
                r.height(),
                TILT_MAX_DEG,
            );
            w_move.request(tilt_css(t));
        });

        dom::add_passive_listener(&card, "pointerleave", move |_ev: web::PointerEvent| {
            writer.reset(TILT_RESET);
        });
    }
}

/// The `.magnet` wrapper pulls its `.magnet__target` towards the pointer
/// while hovered.
pub fn wire_magnet(document: &web::Document, reduced_motion: bool) {
    let Some(wrap) = document.query_selector(MAGNET_SELECTOR).ok().flatten() else {
        return;
    };
    let Some(target) = document
        .query_selector(MAGNET_TARGET_SELECTOR)
        .ok()
        .flatten()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let writer = TransformWriter::new(target);
    let hovering = Rc::new(Cell::new(false));

    let hover_enter = hovering.clone();
    dom::add_passive_listener(&wrap, "pointerenter", move |_ev: web::PointerEvent| {
        hover_enter.set(true);
    });

    let (hover_leave, w_leave) = (hovering.clone(), writer.clone());
    dom::add_passive_listener(&wrap, "pointerleave", move |_ev: web::PointerEvent| {
        hover_leave.set(false);
        w_leave.reset(MAGNET_RESET);
    });

    let wrap_move = wrap.clone();
    dom::add_passive_listener(&wrap, "pointermove", move |ev: web::PointerEvent| {
        if reduced_motion || !hovering.get() {
            return;
        }
        let r = wrap_move.get_bounding_client_rect();
        let pose = magnet_at(
            ev.client_x() as f64 - r.left(),
            ev.client_y() as f64 - r.top(),
            r.width(),
            r.height(),
            MAGNET_STRENGTH_PX,
            MAGNET_ROTATE_DEG,
        );
        writer.request(magnet_css(pose));
    });
}
