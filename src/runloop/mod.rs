//! Single-threaded run loop with repeating timers.
//!
//! The host event loop owns a `RunLoop` and calls [`RunLoop::fire_due`]
//! once per turn. Timers fire on that thread only, so their targets can
//! keep state in `Cell`/`RefCell` without locking.
//!
//! # Architecture
//!
//! - `clock`: time sources (`SystemClock`, `ManualClock`)
//! - `timer`: registrations, the `TimerTarget` trait and the owning `Timer` handle
//!
//! Registrations hold a `Weak` reference to their target. A target that has
//! been dropped is unregistered the next time its timer comes due.

mod clock;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timer::{Timer, TimerId, TimerTarget};

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use timer::{first_deadline, rearm, Registration, TimerTable};

/// Cooperative timer scheduler driven by the host event loop.
///
/// Cloning a `RunLoop` yields another handle to the same timer table.
#[derive(Clone)]
pub struct RunLoop {
    clock: Rc<dyn Clock>,
    table: Rc<RefCell<TimerTable>>,
}

impl RunLoop {
    /// Create a run loop reading time from `clock`.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Rc::new(clock),
            table: Rc::new(RefCell::new(TimerTable::default())),
        }
    }

    /// Create a run loop backed by the wall clock.
    pub fn system() -> Self {
        Self::new(SystemClock)
    }

    /// Current time according to this loop's clock.
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Schedule `target` to fire every `interval`, starting one interval
    /// from now.
    ///
    /// An interval too long to reach from the current instant registers a
    /// timer that never comes due.
    pub fn schedule_repeating(&self, interval: Duration, target: Weak<dyn TimerTarget>) -> Timer {
        let deadline = first_deadline(interval, self.clock.now());
        let id = self.table.borrow_mut().insert(Registration {
            interval,
            deadline,
            target,
        });
        debug!(timer = id.0, interval_secs = interval.as_secs_f64(), "timer scheduled");
        Timer::new(id, interval, Rc::downgrade(&self.table))
    }

    /// Fire every timer whose deadline has passed. Returns how many fired.
    ///
    /// Each due timer fires at most once per call. Callbacks run with no
    /// borrow of the timer table held, so a target may schedule or
    /// invalidate timers (including its own) while handling a tick. A timer
    /// invalidated by an earlier callback in the same turn is skipped.
    pub fn fire_due(&self) -> usize {
        let now = self.clock.now();
        let due: Vec<TimerId> = self
            .table
            .borrow()
            .entries
            .iter()
            .filter(|(_, r)| r.deadline.is_some_and(|deadline| deadline <= now))
            .map(|(id, _)| *id)
            .collect();

        let mut fired = 0;
        for id in due {
            let target = {
                let mut table = self.table.borrow_mut();
                let Some(registration) = table.entries.get_mut(&id) else {
                    continue;
                };
                match registration.target.upgrade() {
                    Some(target) => {
                        registration.deadline = registration
                            .deadline
                            .and_then(|deadline| rearm(deadline, registration.interval, now));
                        target
                    }
                    None => {
                        table.entries.remove(&id);
                        debug!(timer = id.0, "target dropped, timer removed");
                        continue;
                    }
                }
            };
            trace!(timer = id.0, "timer fired");
            target.timer_did_fire();
            fired += 1;
        }
        fired
    }

    /// Earliest pending deadline, if any timer is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.table
            .borrow()
            .entries
            .values()
            .filter_map(|r| r.deadline)
            .min()
    }

    /// How long the host loop may sleep before the next timer is due,
    /// capped at `max`.
    pub fn time_until_next(&self, max: Duration) -> Duration {
        match self.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(self.now()).min(max),
            None => max,
        }
    }

    /// Number of live registrations.
    pub fn timer_count(&self) -> usize {
        self.table.borrow().entries.len()
    }

    /// Whether `id` is still registered.
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.table.borrow().entries.contains_key(&id)
    }
}

impl fmt::Debug for RunLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunLoop")
            .field("timers", &self.timer_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counter {
        ticks: Cell<usize>,
    }

    impl TimerTarget for Counter {
        fn timer_did_fire(&self) {
            self.ticks.set(self.ticks.get() + 1);
        }
    }

    fn setup() -> (ManualClock, RunLoop) {
        let clock = ManualClock::new();
        let run_loop = RunLoop::new(clock.clone());
        (clock, run_loop)
    }

    #[test]
    fn timer_fires_once_per_interval() {
        let (clock, run_loop) = setup();
        let counter = Rc::new(Counter::default());
        let target: Weak<dyn TimerTarget> = Rc::downgrade(&counter) as Weak<dyn TimerTarget>;
        let _timer = run_loop.schedule_repeating(Duration::from_secs(5), target);

        clock.advance_secs(4.9);
        assert_eq!(run_loop.fire_due(), 0);

        clock.advance_secs(0.1);
        assert_eq!(run_loop.fire_due(), 1);
        // Same turn again: deadline was re-armed
        assert_eq!(run_loop.fire_due(), 0);

        clock.advance_secs(5.0);
        run_loop.fire_due();
        assert_eq!(counter.ticks.get(), 2);
    }

    #[test]
    fn dropping_timer_unregisters_it() {
        let (clock, run_loop) = setup();
        let counter = Rc::new(Counter::default());
        let target: Weak<dyn TimerTarget> = Rc::downgrade(&counter) as Weak<dyn TimerTarget>;
        let timer = run_loop.schedule_repeating(Duration::from_secs(1), target);
        let id = timer.id();
        assert!(run_loop.is_scheduled(id));

        drop(timer);

        assert!(!run_loop.is_scheduled(id));
        clock.advance_secs(2.0);
        assert_eq!(run_loop.fire_due(), 0);
        assert_eq!(counter.ticks.get(), 0);
    }

    #[test]
    fn dropped_target_is_removed_instead_of_fired() {
        let (clock, run_loop) = setup();
        let counter = Rc::new(Counter::default());
        let target: Weak<dyn TimerTarget> = Rc::downgrade(&counter) as Weak<dyn TimerTarget>;
        let timer = run_loop.schedule_repeating(Duration::from_secs(1), target);

        drop(counter);
        clock.advance_secs(1.0);

        assert_eq!(run_loop.fire_due(), 0);
        assert!(!timer.is_valid());
        assert_eq!(run_loop.timer_count(), 0);
    }

    #[test]
    fn stalled_loop_does_not_burst() {
        let (clock, run_loop) = setup();
        let counter = Rc::new(Counter::default());
        let target: Weak<dyn TimerTarget> = Rc::downgrade(&counter) as Weak<dyn TimerTarget>;
        let _timer = run_loop.schedule_repeating(Duration::from_secs(1), target);

        clock.advance_secs(10.0);

        assert_eq!(run_loop.fire_due(), 1);
        assert_eq!(run_loop.fire_due(), 0);
    }

    #[test]
    fn next_deadline_tracks_earliest_timer() {
        let (_clock, run_loop) = setup();
        assert!(run_loop.next_deadline().is_none());

        let counter = Rc::new(Counter::default());
        let target: Weak<dyn TimerTarget> = Rc::downgrade(&counter) as Weak<dyn TimerTarget>;
        let start = run_loop.now();
        let _slow = run_loop.schedule_repeating(Duration::from_secs(10), target.clone());
        let _fast = run_loop.schedule_repeating(Duration::from_secs(5), target);

        assert_eq!(run_loop.next_deadline(), Some(start + Duration::from_secs(5)));
    }

    #[test]
    fn time_until_next_is_capped() {
        let (clock, run_loop) = setup();
        let cap = Duration::from_millis(250);
        assert_eq!(run_loop.time_until_next(cap), cap);

        let counter = Rc::new(Counter::default());
        let target: Weak<dyn TimerTarget> = Rc::downgrade(&counter) as Weak<dyn TimerTarget>;
        let _timer = run_loop.schedule_repeating(Duration::from_millis(300), target);
        assert_eq!(run_loop.time_until_next(cap), cap);

        clock.advance(Duration::from_millis(200));
        assert_eq!(run_loop.time_until_next(cap), Duration::from_millis(100));
    }

    #[test]
    fn unreachable_interval_never_comes_due() {
        let (clock, run_loop) = setup();
        let counter = Rc::new(Counter::default());
        let target: Weak<dyn TimerTarget> = Rc::downgrade(&counter) as Weak<dyn TimerTarget>;
        let timer = run_loop.schedule_repeating(Duration::MAX, target);

        for _ in 0..3 {
            assert_eq!(run_loop.fire_due(), 0);
        }
        clock.advance_secs(3600.0);
        assert_eq!(run_loop.fire_due(), 0);

        assert!(timer.is_valid());
        assert!(timer.next_fire().is_none());
        assert!(run_loop.next_deadline().is_none());
        assert_eq!(run_loop.time_until_next(Duration::from_millis(250)), Duration::from_millis(250));
        assert_eq!(counter.ticks.get(), 0);
    }

    /// Target that invalidates a sibling timer when it fires.
    struct Invalidator {
        victim: RefCell<Option<Timer>>,
        ticks: Cell<usize>,
    }

    impl TimerTarget for Invalidator {
        fn timer_did_fire(&self) {
            self.ticks.set(self.ticks.get() + 1);
            self.victim.borrow_mut().take();
        }
    }

    #[test]
    fn timer_invalidated_during_turn_is_skipped() {
        let (clock, run_loop) = setup();
        let invalidator = Rc::new(Invalidator {
            victim: RefCell::new(None),
            ticks: Cell::new(0),
        });
        let counter = Rc::new(Counter::default());

        let first: Weak<dyn TimerTarget> = Rc::downgrade(&invalidator) as Weak<dyn TimerTarget>;
        let second: Weak<dyn TimerTarget> = Rc::downgrade(&counter) as Weak<dyn TimerTarget>;
        // Lower id fires first
        let _killer = run_loop.schedule_repeating(Duration::from_secs(1), first);
        let victim = run_loop.schedule_repeating(Duration::from_secs(1), second);
        *invalidator.victim.borrow_mut() = Some(victim);

        clock.advance_secs(1.0);

        assert_eq!(run_loop.fire_due(), 1);
        assert_eq!(invalidator.ticks.get(), 1);
        assert_eq!(counter.ticks.get(), 0);
    }
}
