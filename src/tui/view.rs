//! Render-ready snapshot of a page container.
//!
//! Rendering reads only a `PagerView`, so frames can be drawn (and tested)
//! without touching the live container or the clock.

use std::time::{Duration, Instant};

use crate::pager::PageContainer;
use crate::scroller::{IntermissionDuration, ScrollerState};

/// Everything the demo needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerView {
    pub page_count: usize,
    pub current_index: Option<usize>,
    pub state: ScrollerState,
    pub duration: IntermissionDuration,
    /// Time left until the next automatic advance, while running
    pub remaining: Option<Duration>,
    pub infinite_scroll: bool,
    pub cancels_on_scroll: bool,
    pub restarts_on_scroll_end: bool,
    pub can_scroll_previous: bool,
    pub can_scroll_next: bool,
    pub auto_scroll_count: usize,
    pub page_count_label: String,
    pub page_label: String,
    pub position_label: String,
}

impl PagerView {
    /// Capture the container state as of `now`.
    pub fn capture(pager: &PageContainer, now: Instant) -> Self {
        let scroller = pager.auto_scroller();
        Self {
            page_count: pager.page_count(),
            current_index: pager.current_index(),
            state: scroller.state(),
            duration: scroller.intermission_duration(),
            remaining: scroller
                .next_fire()
                .map(|deadline| deadline.saturating_duration_since(now)),
            infinite_scroll: pager.is_infinite_scroll_enabled(),
            cancels_on_scroll: scroller.cancels_on_scroll(),
            restarts_on_scroll_end: scroller.restarts_on_scroll_end(),
            can_scroll_previous: pager.can_scroll_previous(),
            can_scroll_next: pager.can_scroll_next(),
            auto_scroll_count: pager.auto_scroll_count(),
            page_count_label: pager.page_count_label(),
            page_label: pager.page_label(),
            position_label: pager.position_label(),
        }
    }

    /// Fraction of the intermission already elapsed, in `0.0..=1.0`.
    /// Zero when not running.
    pub fn progress(&self) -> f64 {
        let Some(remaining) = self.remaining else {
            return 0.0;
        };
        let interval = self.duration.interval();
        if interval.is_zero() {
            return 1.0;
        }
        let elapsed = interval.saturating_sub(remaining);
        (elapsed.as_secs_f64() / interval.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// One-line summary of the scroller, e.g. `running · short (5s) · next in 3.2s`.
    pub fn scroller_summary(&self) -> String {
        let mut summary = format!(
            "{} · {} ({}s)",
            self.state.label(),
            self.duration,
            self.duration.seconds()
        );
        if let Some(remaining) = self.remaining {
            summary.push_str(&format!(" · next in {:.1}s", remaining.as_secs_f64()));
        }
        summary
    }

    /// Policy flags as a compact string for the status line.
    pub fn policy_summary(&self) -> String {
        let flag = |on: bool| if on { "on" } else { "off" };
        format!(
            "cancel on scroll: {} · restart on end: {} · infinite: {}",
            flag(self.cancels_on_scroll),
            flag(self.restarts_on_scroll_end),
            flag(self.infinite_scroll)
        )
    }
}
