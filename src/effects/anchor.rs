use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// In-page `#id` links scroll to their target, smoothly unless the user
/// asked for reduced motion.
pub fn wire_smooth_anchors(document: &web::Document, reduced_motion: bool) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let Some(link) = el.closest("a[href^=\"#\"]").ok().flatten() else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        if href.len() <= 1 {
            return;
        }
        let Some(target) = doc.query_selector(&href).ok().flatten() else {
            return;
        };
        ev.prevent_default();
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(if reduced_motion {
            web::ScrollBehavior::Auto
        } else {
            web::ScrollBehavior::Smooth
        });
        opts.set_block(web::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }) as Box<dyn FnMut(_)>);
    // Not passive: the default jump is replaced by the scroll above.
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
