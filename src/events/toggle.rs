use crate::constants::TOGGLE_ID;
use crate::dom;
use backdrop_core::{Engine, VisualMode};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mode encoded in the toggle's `data-mode`, if the page set one.
pub fn initial_mode(document: &web::Document) -> Option<VisualMode> {
    document
        .get_element_by_id(TOGGLE_ID)
        .and_then(|el| el.get_attribute("data-mode"))
        .and_then(|v| VisualMode::from_attr(&v))
}

pub fn sync_toggle(el: &web::Element, mode: VisualMode) {
    el.set_text_content(Some(mode.label()));
    _ = el.set_attribute("data-mode", mode.as_attr());
    let pressed = if mode == VisualMode::Particles { "true" } else { "false" };
    _ = el.set_attribute("aria-pressed", pressed);
}

/// Clicking `#fx-toggle` flips the visual mode. Without the element the
/// mode stays at its initial value.
pub fn wire_mode_toggle(document: &web::Document, engine: Rc<RefCell<Engine>>) {
    if let Some(el) = document.get_element_by_id(TOGGLE_ID) {
        sync_toggle(&el, engine.borrow().mode());
    }
    let found = dom::add_click_listener(document, TOGGLE_ID, move |el| {
        let mode = engine.borrow_mut().toggle_mode();
        sync_toggle(el, mode);
    });
    if !found {
        log::debug!("[input] no #{}, mode toggle disabled", TOGGLE_ID);
    }
}
