//! Frame loop state machine and resize debouncing.
//!
//! The browser side owns the actual `requestAnimationFrame` handle and the
//! pending `setTimeout`; these types decide when either should exist.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
}

#[derive(Clone, Debug, Default)]
pub struct LoopController {
    state: LoopState,
    /// Read once at startup and never re-checked.
    reduced_motion: bool,
}

impl LoopController {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            state: LoopState::Stopped,
            reduced_motion,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns `true` when a first frame must be scheduled.
    pub fn start(&mut self) -> bool {
        if self.reduced_motion || self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    /// Returns `true` when the pending frame must be canceled.
    pub fn stop(&mut self) -> bool {
        let was_running = self.state == LoopState::Running;
        self.state = LoopState::Stopped;
        was_running
    }

    /// Tab visibility changed.
    pub fn on_visibility(&mut self, hidden: bool) -> VisibilityAction {
        if hidden {
            if self.stop() {
                VisibilityAction::CancelFrame
            } else {
                VisibilityAction::Nothing
            }
        } else if self.start() {
            VisibilityAction::ScheduleFrame
        } else {
            VisibilityAction::Nothing
        }
    }

    /// Called at the top of each frame callback; `false` means skip the step
    /// and do not reschedule.
    pub fn on_frame(&self) -> bool {
        self.is_running()
    }

    /// Called after the step; reschedule only if nothing stopped the loop
    /// meanwhile.
    pub fn should_reschedule(&self) -> bool {
        self.is_running()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityAction {
    Nothing,
    ScheduleFrame,
    CancelFrame,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DebouncePoll {
    /// Nothing pending.
    Idle,
    /// Still inside the quiet period; re-arm the timer for this many ms.
    Wait(f64),
    /// Quiet period elapsed since the latest trigger.
    Fire,
}

/// Trailing-edge debounce with a single timer in flight. Timestamps are
/// milliseconds from any monotonic-enough clock.
#[derive(Clone, Debug)]
pub struct Debounce {
    quiet_ms: f64,
    last: Option<f64>,
    armed: bool,
}

impl Debounce {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms: quiet_ms.max(0.0),
            last: None,
            armed: false,
        }
    }

    /// Record an event. Returns the delay for a new timer, or `None` when
    /// one is already in flight (it will see this event when it fires).
    pub fn trigger(&mut self, now_ms: f64) -> Option<f64> {
        self.last = Some(now_ms);
        if self.armed {
            return None;
        }
        self.armed = true;
        Some(self.quiet_ms)
    }

    /// Called when the timer fires.
    pub fn poll(&mut self, now_ms: f64) -> DebouncePoll {
        let Some(last) = self.last else {
            self.armed = false;
            return DebouncePoll::Idle;
        };
        let elapsed = now_ms - last;
        if elapsed >= self.quiet_ms {
            self.last = None;
            self.armed = false;
            DebouncePoll::Fire
        } else {
            DebouncePoll::Wait(self.quiet_ms - elapsed)
        }
    }

    /// Forget the in-flight timer, e.g. when it could not be armed.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.last = None;
    }

    pub fn is_pending(&self) -> bool {
        self.armed
    }
}
