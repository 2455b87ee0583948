#![cfg(target_arch = "wasm32")]
use backdrop_core::{Engine, EngineConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod effects;
mod events;
mod frame;

use canvas::Canvas2d;
use frame::{FrameContext, FrameLoop, StatsWindow};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    // Best effort: a broken backdrop must never break the host page.
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Read once; a mid-session change of the preference is not picked up.
    let reduced_motion = dom::prefers_reduced_motion(&window);
    effects::wire_page_effects(&document, reduced_motion);

    let canvas = dom::ensure_canvas(&document)?;
    let Some(surface) = Canvas2d::new(&canvas) else {
        log::warn!("[surface] no 2D context, backdrop disabled");
        return Ok(());
    };

    let palette = dom::resolve_palette(&window, &document);
    let mode = events::toggle::initial_mode(&document).unwrap_or_default();
    let config = EngineConfig::default();
    let quiet_ms = config.resize_debounce_ms as f64;
    let engine = Rc::new(RefCell::new(Engine::new(
        config,
        palette,
        mode,
        reduced_motion,
        StdRng::from_entropy(),
    )?));
    log::info!(
        "[engine] mode={} reduced_motion={}",
        mode.as_attr(),
        reduced_motion
    );

    let frame_loop = FrameLoop::new(FrameContext {
        engine: engine.clone(),
        surface,
        stats: StatsWindow::default(),
    });
    // First configure; under reduced motion this is also the one static paint.
    events::lifecycle::apply_resize(&window, &canvas, &frame_loop);

    events::wire_mode_toggle(&document, engine.clone());
    events::wire_input_handlers(engine.clone());
    events::wire_visibility(&document, frame_loop.clone());
    events::wire_resize(&window, canvas, frame_loop.clone(), quiet_ms);

    if engine.borrow_mut().start() {
        frame_loop.schedule();
    }
    Ok(())
}
