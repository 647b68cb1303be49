//! Event loop and key handling for the pager demo.
//!
//! Each turn draws a frame, waits for input no longer than the next timer
//! deadline (capped at the tick rate), then fires due timers. Timers and
//! input therefore run on the same thread, one after the other.

use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use super::render;
use super::terminal::TerminalSession;
use super::view::PagerView;
use crate::pager::{Page, PageContainer};
use crate::runloop::RunLoop;
use crate::scroller::IntermissionDuration;
use crate::theme::Theme;

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Keep running
    Continue,
    /// Leave the demo
    Quit,
}

/// Interactive terminal front end for a `PageContainer`.
pub struct PagerApp {
    run_loop: RunLoop,
    pager: Rc<PageContainer>,
    theme: Theme,
    tick_rate: Duration,
    show_help: bool,
}

impl PagerApp {
    pub fn new(run_loop: RunLoop, pager: Rc<PageContainer>, theme: Theme, tick_rate: Duration) -> Self {
        Self {
            run_loop,
            pager,
            theme,
            tick_rate,
            show_help: false,
        }
    }

    pub fn pager(&self) -> &PageContainer {
        &self.pager
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Snapshot for the next frame.
    pub fn view(&self) -> PagerView {
        PagerView::capture(&self.pager, self.run_loop.now())
    }

    /// Run until the user quits. Takes over the terminal.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self) -> Result<()> {
        let mut session = TerminalSession::enter()?;
        info!(pages = self.pager.page_count(), "pager demo started");

        loop {
            let view = self.view();
            let theme = &self.theme;
            let show_help = self.show_help;
            session.draw(|frame| render::render(frame, &view, theme, show_help))?;

            let timeout = self.run_loop.time_until_next(self.tick_rate);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) == KeyResult::Quit {
                        break;
                    }
                }
            }
            self.run_loop.fire_due();
        }

        info!(
            auto_scrolls = self.pager.auto_scroll_count(),
            "pager demo finished"
        );
        Ok(())
    }

    /// Apply a key press to the pager.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        // Any key closes the help overlay
        if self.show_help {
            self.show_help = false;
            return KeyResult::Continue;
        }

        let scroller = self.pager.auto_scroller();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return KeyResult::Quit
            }
            KeyCode::Char('?') => self.show_help = true,

            // Manual scrolling
            KeyCode::Left | KeyCode::Char('p') => {
                self.pager.drag_to(Page::Previous);
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.pager.drag_to(Page::Next);
            }
            KeyCode::Home => {
                self.pager.drag_to(Page::First);
            }
            KeyCode::End => {
                self.pager.drag_to(Page::Last);
            }

            // Auto scrolling
            KeyCode::Char(' ') => {
                if scroller.is_enabled() {
                    scroller.disable();
                } else {
                    scroller.enable(None);
                }
            }
            KeyCode::Char('s') => Self::switch_duration(&self.pager, IntermissionDuration::Short),
            KeyCode::Char('l') => Self::switch_duration(&self.pager, IntermissionDuration::Long),

            // Policy toggles
            KeyCode::Char('c') => scroller.set_cancels_on_scroll(!scroller.cancels_on_scroll()),
            KeyCode::Char('r') => {
                scroller.set_restarts_on_scroll_end(!scroller.restarts_on_scroll_end())
            }
            KeyCode::Char('i') => self
                .pager
                .set_infinite_scroll_enabled(!self.pager.is_infinite_scroll_enabled()),

            _ => {}
        }
        KeyResult::Continue
    }

    /// Restart auto scrolling with a new intermission.
    fn switch_duration(pager: &PageContainer, duration: IntermissionDuration) {
        let scroller = pager.auto_scroller();
        scroller.disable();
        scroller.enable(Some(duration));
        debug!(%duration, "intermission switched");
    }
}
