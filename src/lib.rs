//! Autopager
//!
//! A page container that advances on a repeating timer.
//!
//! - [`scroller`]: the auto-scroll state machine (`AutoScroller`)
//! - [`runloop`]: single-threaded timers the scroller schedules on
//! - [`pager`]: the page container that drives and listens to the scroller
//! - [`tui`]: terminal demo rendering a pager
//! - [`config`]: TOML configuration
//!
//! Everything runs on one thread: the host event loop calls
//! [`runloop::RunLoop::fire_due`] each turn, timers call back into their
//! scrollers, and scrollers call back into their delegates.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pager;
pub mod runloop;
pub mod scroller;
pub mod theme;
pub mod tui;

pub use config::Config;
pub use pager::{Page, PageContainer};
pub use runloop::RunLoop;
pub use scroller::{AutoScrollDelegate, AutoScroller, IntermissionDuration, ScrollerState};
