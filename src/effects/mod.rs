//! Page effects that live beside the backdrop: smooth in-page anchors,
//! scroll reveal, tilt cards, the magnetic button, and click ripples.
//! Each one is a set of independent listeners with no shared state.

pub mod anchor;
pub mod math;
pub mod pointer_fx;
pub mod reveal;
pub mod ripple;

use web_sys as web;

/// Collect the elements matching `selector` (invalid selectors match nothing).
pub(crate) fn select_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    use wasm_bindgen::JsCast;
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn wire_page_effects(document: &web::Document, reduced_motion: bool) {
    anchor::wire_smooth_anchors(document, reduced_motion);
    reveal::wire_reveal(document);
    pointer_fx::wire_tilt(document, reduced_motion);
    pointer_fx::wire_magnet(document, reduced_motion);
    ripple::wire_ripples(document);
}
