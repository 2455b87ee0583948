use crate::canvas::Canvas2d;
use crate::constants::STATS_INTERVAL_SEC;
use backdrop_core::{Engine, FrameStats};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<Engine>>,
    pub surface: Canvas2d,
    pub stats: StatsWindow,
}

impl FrameContext {
    /// One animation frame. Returns whether another frame should follow.
    pub fn frame(&mut self) -> bool {
        let mut engine = self.engine.borrow_mut();
        let Some(stats) = engine.frame(&mut self.surface) else {
            return false;
        };
        self.stats.record(stats);
        engine.should_reschedule()
    }

    /// Single dots-only pass for reduced motion.
    pub fn paint_static(&mut self) {
        let stats = self.engine.borrow().render_static(&mut self.surface);
        log::info!("[engine] static render, {} particles", stats.particles);
    }
}

/// Rolling per-second frame statistics, logged at debug level.
pub struct StatsWindow {
    started: Instant,
    frames: u32,
    links: usize,
    peak_waves: usize,
}

impl Default for StatsWindow {
    fn default() -> Self {
        Self {
            started: Instant::now(),
            frames: 0,
            links: 0,
            peak_waves: 0,
        }
    }
}

impl StatsWindow {
    fn record(&mut self, s: FrameStats) {
        self.frames += 1;
        self.links += s.links;
        self.peak_waves = self.peak_waves.max(s.waves);
        let elapsed = self.started.elapsed().as_secs_f32();
        if elapsed >= STATS_INTERVAL_SEC {
            log::debug!(
                "[loop] fps={:.0} avg_links={:.0} peak_waves={}",
                self.frames as f32 / elapsed,
                self.links as f32 / self.frames.max(1) as f32,
                self.peak_waves
            );
            *self = Self::default();
        }
    }
}

/// `requestAnimationFrame` driver. Cloning shares the same loop.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        let lp = Self {
            ctx: Rc::new(RefCell::new(ctx)),
            tick: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        };
        let lp_tick = lp.clone();
        *lp.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            lp_tick.pending.set(None);
            let again = lp_tick.ctx.borrow_mut().frame();
            if again {
                lp_tick.schedule();
            }
        }) as Box<dyn FnMut()>));
        lp
    }

    pub fn context(&self) -> &Rc<RefCell<FrameContext>> {
        &self.ctx
    }

    /// Request the next frame unless one is already pending.
    pub fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(handle) => self.pending.set(Some(handle)),
                Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
        }
    }
}
