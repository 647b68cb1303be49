//! Timer-driven automatic page advancing.
//!
//! An [`AutoScroller`] owns at most one repeating [`Timer`] and asks its
//! delegate to advance a page every time the timer fires. The page
//! container drives it through four transitions:
//!
//! - `enable` / `disable`: explicit user control
//! - `cancel`: a manual drag began; stop, but remember to resume
//! - `restart`: the drag ended; resume if a cancel is pending
//!
//! Every transition is a guarded no-op when it does not apply. None of
//! them fail.
//!
//! # Usage
//!
//! ```
//! use std::rc::{Rc, Weak};
//! use autopager::runloop::{ManualClock, RunLoop};
//! use autopager::scroller::{AutoScrollDelegate, AutoScroller, IntermissionDuration};
//!
//! struct Logger;
//! impl AutoScrollDelegate for Logger {
//!     fn auto_scroller_did_request_scroll(&self, _scroller: &AutoScroller) {
//!         println!("next page");
//!     }
//! }
//!
//! let clock = ManualClock::new();
//! let run_loop = RunLoop::new(clock.clone());
//! let scroller = AutoScroller::new(run_loop.clone());
//! let logger = Rc::new(Logger);
//! let delegate: Weak<dyn AutoScrollDelegate> = Rc::downgrade(&logger) as Weak<dyn AutoScrollDelegate>;
//! scroller.set_delegate(delegate);
//!
//! scroller.enable(Some(IntermissionDuration::Long));
//! clock.advance_secs(10.0);
//! assert_eq!(run_loop.fire_due(), 1);
//! ```

mod duration;
mod state;

pub use duration::{DurationParseError, IntermissionDuration};
pub use state::{PendingRestartPolicy, ScrollerState};

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::runloop::{RunLoop, TimerId, TimerTarget};
use state::Phase;

/// Receiver of auto-scroll requests.
pub trait AutoScrollDelegate {
    /// The scroller's timer elapsed; the receiver should show the next page.
    fn auto_scroller_did_request_scroll(&self, scroller: &AutoScroller);
}

/// Periodically requests page advances from its delegate.
///
/// Created behind an `Rc` so the run loop can hold a `Weak` back-reference
/// to it. The delegate is held weakly too, which lets the delegate own the
/// scroller without a cycle.
pub struct AutoScroller {
    run_loop: RunLoop,
    this: Weak<AutoScroller>,
    phase: RefCell<Phase>,
    intermission_duration: Cell<IntermissionDuration>,
    cancels_on_scroll: Cell<bool>,
    restarts_on_scroll_end: Cell<bool>,
    pending_restart_policy: Cell<PendingRestartPolicy>,
    delegate: RefCell<Option<Weak<dyn AutoScrollDelegate>>>,
}

impl AutoScroller {
    /// Create a disabled scroller whose timers run on `run_loop`.
    pub fn new(run_loop: RunLoop) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            run_loop,
            this: this.clone(),
            phase: RefCell::new(Phase::Stopped),
            intermission_duration: Cell::new(IntermissionDuration::default()),
            cancels_on_scroll: Cell::new(true),
            restarts_on_scroll_end: Cell::new(false),
            pending_restart_policy: Cell::new(PendingRestartPolicy::default()),
            delegate: RefCell::new(None),
        })
    }

    /// Set the receiver of scroll requests. Replaces any previous delegate.
    pub fn set_delegate(&self, delegate: Weak<dyn AutoScrollDelegate>) {
        *self.delegate.borrow_mut() = Some(delegate);
    }

    /// Remove the delegate. Ticks keep firing but reach nobody.
    pub fn clear_delegate(&self) {
        self.delegate.borrow_mut().take();
    }

    // === State ===

    /// Enable auto scrolling.
    ///
    /// No-op if already enabled, in which case `duration` is ignored too.
    /// A supplied duration replaces the stored one and sticks for later
    /// calls that omit it.
    pub fn enable(&self, duration: Option<IntermissionDuration>) {
        if self.is_enabled() {
            trace!("enable ignored, already running");
            return;
        }

        if let Some(duration) = duration {
            self.intermission_duration.set(duration);
        }

        let restart_pending = match self.pending_restart_policy.get() {
            PendingRestartPolicy::ClearOnEnable => false,
            PendingRestartPolicy::KeepOnEnable => self.phase.borrow().restart_pending(),
        };

        let target: Weak<dyn TimerTarget> = self.this.clone();
        let timer = self.run_loop.schedule_repeating(self.interval(), target);
        *self.phase.borrow_mut() = Phase::Running {
            timer,
            restart_pending,
        };
        debug!(
            duration = %self.intermission_duration.get(),
            restart_pending,
            "auto scroll enabled"
        );
    }

    /// Disable auto scrolling. No-op if already disabled.
    ///
    /// The timer is invalidated before this returns.
    pub fn disable(&self) {
        let previous = {
            let mut phase = self.phase.borrow_mut();
            let next = match &*phase {
                Phase::Running {
                    restart_pending: true,
                    ..
                } => Phase::StoppedPendingRestart,
                Phase::Running { .. } => Phase::Stopped,
                _ => {
                    trace!("disable ignored, not running");
                    return;
                }
            };
            std::mem::replace(&mut *phase, next)
        };

        if let Phase::Running { mut timer, .. } = previous {
            timer.invalidate();
        }
        debug!(state = self.state().label(), "auto scroll disabled");
    }

    /// Stop because the user started scrolling, remembering to resume.
    /// No-op if disabled.
    pub(crate) fn cancel(&self) {
        {
            let mut phase = self.phase.borrow_mut();
            match &mut *phase {
                Phase::Running {
                    restart_pending, ..
                } => *restart_pending = true,
                _ => {
                    trace!("cancel ignored, not running");
                    return;
                }
            }
        }
        debug!("auto scroll cancelled by scroll");
        self.disable();
    }

    /// Resume after a cancel. No-op unless a cancel is pending and the
    /// scroller is stopped. Reuses the stored duration.
    pub(crate) fn restart(&self) {
        {
            let mut phase = self.phase.borrow_mut();
            if !matches!(*phase, Phase::StoppedPendingRestart) {
                trace!("restart ignored, nothing pending");
                return;
            }
            *phase = Phase::Stopped;
        }
        debug!("auto scroll restarting");
        self.enable(None);
    }

    // === Observers ===

    /// Current state.
    pub fn state(&self) -> ScrollerState {
        self.phase.borrow().state()
    }

    /// Whether a timer is scheduled.
    pub fn is_enabled(&self) -> bool {
        self.state() == ScrollerState::Running
    }

    /// Whether a cancel is waiting for its matching restart.
    pub fn is_pending_restart(&self) -> bool {
        self.phase.borrow().restart_pending()
    }

    /// The duration spent on each page. Default: `Short`.
    pub fn intermission_duration(&self) -> IntermissionDuration {
        self.intermission_duration.get()
    }

    /// The stored duration resolved to a timer interval.
    pub fn interval(&self) -> Duration {
        self.intermission_duration.get().interval()
    }

    /// Id of the live timer, if running.
    pub fn timer_id(&self) -> Option<TimerId> {
        self.phase.borrow().timer().map(|t| t.id())
    }

    /// When the next scroll request is due, if running.
    pub fn next_fire(&self) -> Option<Instant> {
        self.phase.borrow().timer().and_then(|t| t.next_fire())
    }

    // === Policy ===

    /// Whether the page container cancels auto scrolling when the user
    /// starts a drag. Default: `true`.
    pub fn cancels_on_scroll(&self) -> bool {
        self.cancels_on_scroll.get()
    }

    pub fn set_cancels_on_scroll(&self, value: bool) {
        self.cancels_on_scroll.set(value);
    }

    /// Whether the page container restarts auto scrolling when a drag
    /// ends. Default: `false`.
    pub fn restarts_on_scroll_end(&self) -> bool {
        self.restarts_on_scroll_end.get()
    }

    pub fn set_restarts_on_scroll_end(&self, value: bool) {
        self.restarts_on_scroll_end.set(value);
    }

    pub fn pending_restart_policy(&self) -> PendingRestartPolicy {
        self.pending_restart_policy.get()
    }

    pub fn set_pending_restart_policy(&self, policy: PendingRestartPolicy) {
        self.pending_restart_policy.set(policy);
    }
}

impl TimerTarget for AutoScroller {
    fn timer_did_fire(&self) {
        let delegate = self.delegate.borrow().as_ref().and_then(Weak::upgrade);
        match delegate {
            Some(delegate) => delegate.auto_scroller_did_request_scroll(self),
            None => trace!("tick with no delegate"),
        }
    }
}

impl Drop for AutoScroller {
    fn drop(&mut self) {
        if let Phase::Running { mut timer, .. } = std::mem::take(self.phase.get_mut()) {
            timer.invalidate();
            trace!("auto scroller dropped while running, timer released");
        }
    }
}

impl fmt::Debug for AutoScroller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoScroller")
            .field("state", &self.state())
            .field("intermission_duration", &self.intermission_duration.get())
            .field("cancels_on_scroll", &self.cancels_on_scroll.get())
            .field("restarts_on_scroll_end", &self.restarts_on_scroll_end.get())
            .finish()
    }
}
