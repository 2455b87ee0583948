use super::math::ripple_box;
use super::select_all;
use crate::constants::{RIPPLE_CLASS, RIPPLE_LIFETIME_MS, RIPPLE_SELECTOR};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn spawn_ripple(host: &web::Element, ev: &web::MouseEvent) -> Option<()> {
    let document = host.owner_document()?;
    let rect = host.get_bounding_client_rect();
    let b = ripple_box(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
        rect.width(),
        rect.height(),
    );
    let span = document.create_element("span").ok()?;
    span.set_class_name(RIPPLE_CLASS);
    _ = span.set_attribute(
        "style",
        &format!(
            "width:{0}px;height:{0}px;left:{1}px;top:{2}px",
            b.size, b.left, b.top
        ),
    );
    host.append_child(&span).ok()?;

    let remove = Closure::once_into_js(move || span.remove());
    web::window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.unchecked_ref(),
            RIPPLE_LIFETIME_MS,
        )
        .ok()?;
    Some(())
}

/// Transient ripple element on every click of a `[data-ripple]` control.
pub fn wire_ripples(document: &web::Document) {
    for el in select_all(document, RIPPLE_SELECTOR) {
        let host = el.clone();
        dom::add_passive_listener(&el, "click", move |ev: web::MouseEvent| {
            _ = spawn_ripple(&host, &ev);
        });
    }
}
