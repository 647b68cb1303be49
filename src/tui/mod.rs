//! Terminal demo for the page container
//!
//! Renders a `PageContainer` with ratatui/crossterm and drives its run loop
//! from the terminal event loop.
//!
//! - `app`: event loop and key handling
//! - `view`: render-ready snapshot of the pager
//! - `render`: frame layout and widgets
//! - `terminal`: raw-mode session guard

pub mod app;
pub mod render;
mod terminal;
pub mod view;

pub use app::{KeyResult, PagerApp};
pub use view::PagerView;
