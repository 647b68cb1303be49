//! Paged container driven by an auto scroller.
//!
//! `PageContainer` is the collaborator around an [`AutoScroller`]: it owns
//! the page position, answers scroll requests, and turns manual drags into
//! `cancel`/`restart` calls according to the scroller's policy flags.
//!
//! # Usage
//!
//! ```
//! use autopager::pager::{Page, PageContainer};
//! use autopager::runloop::{ManualClock, RunLoop};
//!
//! let clock = ManualClock::new();
//! let run_loop = RunLoop::new(clock.clone());
//! let pager = PageContainer::new(run_loop.clone(), 3);
//!
//! pager.auto_scroller().enable(None);
//! clock.advance_secs(5.0);
//! run_loop.fire_due();
//! assert_eq!(pager.current_index(), Some(1));
//!
//! pager.scroll_to(Page::Last);
//! assert_eq!(pager.current_index(), Some(2));
//! ```

mod page;

pub use page::{NavigationDirection, Page};

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::runloop::RunLoop;
use crate::scroller::{AutoScrollDelegate, AutoScroller};

/// Record of the most recent page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub from: usize,
    pub to: usize,
    pub direction: NavigationDirection,
    /// True when the change came from the auto scroller
    pub automatic: bool,
}

/// A fixed set of pages with a current position and an auto scroller.
pub struct PageContainer {
    page_count: Cell<usize>,
    current_index: Cell<Option<usize>>,
    infinite_scroll: Cell<bool>,
    dragging: Cell<bool>,
    last_change: Cell<Option<PageChange>>,
    auto_scroll_count: Cell<usize>,
    auto_scroller: Rc<AutoScroller>,
}

impl PageContainer {
    /// Create a container of `page_count` pages showing the first one.
    ///
    /// The container registers itself as the scroller's delegate.
    pub fn new(run_loop: RunLoop, page_count: usize) -> Rc<Self> {
        let container = Rc::new(Self {
            page_count: Cell::new(page_count),
            current_index: Cell::new((page_count > 0).then_some(0)),
            infinite_scroll: Cell::new(false),
            dragging: Cell::new(false),
            last_change: Cell::new(None),
            auto_scroll_count: Cell::new(0),
            auto_scroller: AutoScroller::new(run_loop),
        });
        let delegate: Weak<dyn AutoScrollDelegate> =
            Rc::downgrade(&container) as Weak<dyn AutoScrollDelegate>;
        container.auto_scroller.set_delegate(delegate);
        container
    }

    pub fn auto_scroller(&self) -> &AutoScroller {
        &self.auto_scroller
    }

    pub fn page_count(&self) -> usize {
        self.page_count.get()
    }

    /// Index of the visible page, `None` when empty.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index.get()
    }

    /// Scroll position in page units.
    pub fn current_position(&self) -> f64 {
        self.current_index.get().unwrap_or(0) as f64
    }

    pub fn last_change(&self) -> Option<PageChange> {
        self.last_change.get()
    }

    /// Number of page changes made by the auto scroller.
    pub fn auto_scroll_count(&self) -> usize {
        self.auto_scroll_count.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.get()
    }

    /// Whether `Next`/`Previous` wrap around at the ends. Default: `false`.
    pub fn is_infinite_scroll_enabled(&self) -> bool {
        self.infinite_scroll.get()
    }

    pub fn set_infinite_scroll_enabled(&self, enabled: bool) {
        self.infinite_scroll.set(enabled);
    }

    /// Replace the page set, keeping the position when it is still valid.
    pub fn reload(&self, page_count: usize) {
        self.page_count.set(page_count);
        let index = match self.current_index.get() {
            Some(i) if i < page_count => Some(i),
            _ if page_count > 0 => Some(0),
            _ => None,
        };
        self.current_index.set(index);
        debug!(page_count, ?index, "pages reloaded");
    }

    // === Navigation ===

    /// Move to `page`. Returns false if the request had no valid target.
    pub fn scroll_to(&self, page: Page) -> bool {
        self.move_to(page, self.infinite_scroll.get(), false)
    }

    fn move_to(&self, page: Page, wraps: bool, automatic: bool) -> bool {
        let Some(from) = self.current_index.get() else {
            trace!(?page, "scroll ignored, no pages");
            return false;
        };
        let Some(to) = page::resolve(page, from, self.page_count.get(), wraps) else {
            trace!(?page, from, "scroll ignored, no target");
            return false;
        };
        if to == from {
            trace!(?page, from, "scroll ignored, already on page");
            return false;
        }

        let direction = NavigationDirection::for_move(page, from, to);
        self.current_index.set(Some(to));
        self.last_change.set(Some(PageChange {
            from,
            to,
            direction,
            automatic,
        }));
        debug!(from, to, ?direction, automatic, "scrolled to page");
        true
    }

    /// Whether a "previous" control should be enabled.
    pub fn can_scroll_previous(&self) -> bool {
        match self.current_index.get() {
            Some(i) => i > 0 || (self.infinite_scroll.get() && self.page_count.get() > 1),
            None => false,
        }
    }

    /// Whether a "next" control should be enabled.
    pub fn can_scroll_next(&self) -> bool {
        match self.current_index.get() {
            Some(i) => {
                i + 1 < self.page_count.get()
                    || (self.infinite_scroll.get() && self.page_count.get() > 1)
            }
            None => false,
        }
    }

    // === Drag lifecycle ===

    /// A manual scroll began. Cancels auto scrolling if the scroller's
    /// `cancels_on_scroll` flag is set.
    pub fn drag_began(&self) {
        self.dragging.set(true);
        if self.auto_scroller.cancels_on_scroll() {
            self.auto_scroller.cancel();
        }
    }

    /// A manual scroll ended. Restarts auto scrolling if the scroller's
    /// `restarts_on_scroll_end` flag is set.
    pub fn drag_ended(&self) {
        self.dragging.set(false);
        if self.auto_scroller.restarts_on_scroll_end() {
            self.auto_scroller.restart();
        }
    }

    /// A full manual scroll gesture: begin, move to `page`, end.
    pub fn drag_to(&self, page: Page) -> bool {
        self.drag_began();
        let moved = self.scroll_to(page);
        self.drag_ended();
        moved
    }

    // === Status text ===

    pub fn page_count_label(&self) -> String {
        format!("Page Count: {}", self.page_count.get())
    }

    pub fn position_label(&self) -> String {
        format!("Current Position: {:.3}", self.current_position())
    }

    pub fn page_label(&self) -> String {
        format!("Current Page: {}", self.current_index.get().unwrap_or(0))
    }
}

impl AutoScrollDelegate for PageContainer {
    /// Advance one page; from the last page, go back to the first even
    /// when infinite scroll is off.
    fn auto_scroller_did_request_scroll(&self, _scroller: &AutoScroller) {
        let moved = if self.infinite_scroll.get() {
            self.move_to(Page::Next, true, true)
        } else {
            self.move_to(Page::Next, false, true) || self.move_to(Page::First, false, true)
        };
        if moved {
            self.auto_scroll_count.set(self.auto_scroll_count.get() + 1);
        }
    }
}

impl fmt::Debug for PageContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageContainer")
            .field("page_count", &self.page_count.get())
            .field("current_index", &self.current_index.get())
            .field("infinite_scroll", &self.infinite_scroll.get())
            .field("auto_scroller", &self.auto_scroller)
            .finish()
    }
}
