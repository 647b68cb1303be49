//! Repeating timer registrations and their owning handle.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Weak;
use std::time::{Duration, Instant};

use tracing::trace;

/// Receiver of timer ticks.
///
/// The run loop only keeps a `Weak` reference to the target, so a
/// registration never keeps its target alive.
pub trait TimerTarget {
    /// Called once per elapsed interval.
    fn timer_did_fire(&self);
}

/// Identifier of a timer registration within one run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub(crate) u64);

/// A single repeating registration.
///
/// `deadline` is `None` when the next tick lies beyond what an `Instant`
/// can represent. Such a registration never comes due.
pub(crate) struct Registration {
    pub(crate) interval: Duration,
    pub(crate) deadline: Option<Instant>,
    pub(crate) target: Weak<dyn TimerTarget>,
}

/// All live registrations of a run loop, ordered by id.
#[derive(Default)]
pub(crate) struct TimerTable {
    pub(crate) next_id: u64,
    pub(crate) entries: BTreeMap<TimerId, Registration>,
}

impl TimerTable {
    pub(crate) fn insert(&mut self, registration: Registration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, registration);
        id
    }
}

/// Owning handle for a scheduled repeating timer.
///
/// Dropping the handle (or calling [`Timer::invalidate`]) removes the
/// registration before returning, so no further tick is delivered.
pub struct Timer {
    id: TimerId,
    interval: Duration,
    table: Weak<RefCell<TimerTable>>,
}

impl Timer {
    pub(crate) fn new(id: TimerId, interval: Duration, table: Weak<RefCell<TimerTable>>) -> Self {
        Self {
            id,
            interval,
            table,
        }
    }

    /// Registration id in the owning run loop.
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Interval between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the registration still exists in its run loop.
    pub fn is_valid(&self) -> bool {
        match self.table.upgrade() {
            Some(table) => {
                let registered = table.borrow().entries.contains_key(&self.id);
                registered
            }
            None => false,
        }
    }

    /// Next instant this timer will fire, if still registered.
    pub fn next_fire(&self) -> Option<Instant> {
        let table = self.table.upgrade()?;
        let deadline = table.borrow().entries.get(&self.id).and_then(|r| r.deadline);
        deadline
    }

    /// Remove the registration. Idempotent.
    pub fn invalidate(&mut self) {
        if let Some(table) = self.table.upgrade() {
            if table.borrow_mut().entries.remove(&self.id).is_some() {
                trace!(timer = self.id.0, "timer invalidated");
            }
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.invalidate();
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("id", &self.id)
            .field("interval", &self.interval)
            .finish()
    }
}

/// First deadline of a registration made at `now`.
pub(crate) fn first_deadline(interval: Duration, now: Instant) -> Option<Instant> {
    now.checked_add(interval)
}

/// Compute the next deadline after a tick, skipping periods the loop
/// missed while it was busy. A zero interval fires once per turn.
///
/// Returns `None` when the next deadline cannot be represented.
pub(crate) fn rearm(deadline: Instant, interval: Duration, now: Instant) -> Option<Instant> {
    if interval.is_zero() {
        return Some(now);
    }
    let behind = now.saturating_duration_since(deadline);
    let periods = behind.as_nanos() / interval.as_nanos() + 1;
    match u32::try_from(periods) {
        Ok(periods) => deadline.checked_add(interval.checked_mul(periods)?),
        // Too many missed periods to count; realign on the current time
        Err(_) => now.checked_add(interval),
    }
}
