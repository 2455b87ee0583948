use crate::constants::{CANVAS_ID, CANVAS_STYLE, REDUCED_MOTION_QUERY};
use backdrop_core::{Palette, SurfaceGeometry};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a click handler to `#element_id`. Returns `false` when the element
/// does not exist.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(&web::Element) + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let target = el.clone();
    let closure = Closure::wrap(Box::new(move || handler(&target)) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

/// Register a passive listener that lives for the rest of the page session.
pub fn add_passive_listener<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn viewport(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn document_hidden(document: &web::Document) -> bool {
    document.visibility_state() == web::VisibilityState::Hidden
}

/// Read the brand tokens from the root element's computed style.
pub fn resolve_palette(window: &web::Window, document: &web::Document) -> Palette {
    let style = document
        .document_element()
        .and_then(|root| window.get_computed_style(&root).ok().flatten());
    Palette::from_lookup(|name| {
        style
            .as_ref()
            .and_then(|s| s.get_property_value(name).ok())
    })
}

/// Find `#fx-canvas`, or create it as the first child of `<body>`.
pub fn ensure_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", CANVAS_ID, e)));
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("aria-hidden", "true");
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    body.prepend_with_node_1(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[surface] created #{}", CANVAS_ID);
    Ok(canvas)
}

/// Backing store in device pixels, display size in CSS pixels.
pub fn apply_canvas_size(canvas: &web::HtmlCanvasElement, geom: &SurfaceGeometry) {
    canvas.set_width(geom.width);
    canvas.set_height(geom.height);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", geom.logical.x));
    _ = style.set_property("height", &format!("{}px", geom.logical.y));
}
