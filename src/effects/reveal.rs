use super::select_all;
use crate::constants::{REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Mark `.reveal` elements visible the first time they scroll into view.
pub fn wire_reveal(document: &web::Document) {
    let els = select_all(document, REVEAL_SELECTOR);
    if els.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1(REVEAL_VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &els {
                observer.observe(el);
            }
            callback.forget();
            log::debug!("[fx] observing {} reveal elements", els.len());
        }
        Err(e) => {
            // Without an observer, show everything rather than hide content.
            log::warn!("[fx] IntersectionObserver unavailable: {:?}", e);
            for el in &els {
                _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
            }
        }
    }
}
