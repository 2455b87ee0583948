use crate::dom;
use crate::frame::FrameLoop;
use backdrop_core::{Debounce, DebouncePoll, VisibilityAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pause while the tab is hidden, resume when it comes back.
pub fn wire_visibility(document: &web::Document, frame_loop: FrameLoop) {
    let doc = document.clone();
    dom::add_passive_listener(document, "visibilitychange", move |_ev: web::Event| {
        let hidden = dom::document_hidden(&doc);
        let action = frame_loop
            .context()
            .borrow()
            .engine
            .borrow_mut()
            .on_visibility(hidden);
        match action {
            VisibilityAction::ScheduleFrame => frame_loop.schedule(),
            VisibilityAction::CancelFrame => frame_loop.cancel(),
            VisibilityAction::Nothing => {}
        }
    });
}

/// Re-measure the viewport and resize the surface. Returns whether the
/// geometry changed.
pub fn apply_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    frame_loop: &FrameLoop,
) -> bool {
    let (w, h) = dom::viewport(window);
    let dpr = window.device_pixel_ratio();
    let ctx = frame_loop.context();
    let (changed, reduced) = {
        let ctx_ref = ctx.borrow();
        let mut engine = ctx_ref.engine.borrow_mut();
        let changed = engine.configure(w, h, dpr);
        if changed {
            dom::apply_canvas_size(canvas, engine.surface());
        }
        (changed, engine.reduced_motion())
    };
    // Resizing the backing store wipes it; the running loop repaints on its
    // next frame, the static pass has to be redrawn here.
    if changed && reduced {
        ctx.borrow_mut().paint_static();
    }
    changed
}

/// Returns `false` when no timer could be set.
fn arm_timer(cb: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, delay_ms: f64) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let slot = cb.borrow();
    let Some(cb) = slot.as_ref() else {
        return false;
    };
    match w.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay_ms.ceil() as i32,
    ) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("[loop] resize timer not armed: {:?}", e);
            false
        }
    }
}

/// Debounced window resize: reconfigure only after `quiet_ms` without
/// further resize events.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    frame_loop: FrameLoop,
    quiet_ms: f64,
) {
    let debounce = Rc::new(RefCell::new(Debounce::new(quiet_ms)));
    let timer: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let (debounce_fire, timer_fire) = (debounce.clone(), timer.clone());
    *timer.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let poll = debounce_fire.borrow_mut().poll(js_sys::Date::now());
        match poll {
            DebouncePoll::Fire => {
                if let Some(w) = web::window() {
                    apply_resize(&w, &canvas, &frame_loop);
                }
            }
            DebouncePoll::Wait(ms) => {
                if !arm_timer(&timer_fire, ms) {
                    debounce_fire.borrow_mut().disarm();
                }
            }
            DebouncePoll::Idle => {}
        }
    }) as Box<dyn FnMut()>));

    dom::add_passive_listener(window, "resize", move |_ev: web::Event| {
        let delay = debounce.borrow_mut().trigger(js_sys::Date::now());
        if let Some(ms) = delay {
            if !arm_timer(&timer, ms) {
                debounce.borrow_mut().disarm();
            }
        }
    });
}
