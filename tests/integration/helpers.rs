//! Shared helpers for integration tests

use std::cell::RefCell;
use std::process::Command;
use std::rc::{Rc, Weak};

use autopager::runloop::{ManualClock, RunLoop};
use autopager::{AutoScrollDelegate, AutoScroller};
use tempfile::TempDir;

/// Delegate that records the address of every scroller that called it.
#[derive(Default)]
pub struct RecordingDelegate {
    calls: RefCell<Vec<*const AutoScroller>>,
}

impl RecordingDelegate {
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn all_from(&self, scroller: &Rc<AutoScroller>) -> bool {
        let expected = Rc::as_ptr(scroller);
        self.calls.borrow().iter().all(|p| *p == expected)
    }
}

impl AutoScrollDelegate for RecordingDelegate {
    fn auto_scroller_did_request_scroll(&self, scroller: &AutoScroller) {
        self.calls.borrow_mut().push(scroller as *const AutoScroller);
    }
}

/// A scroller on a manual clock with a recording delegate attached.
pub struct ScrollerHarness {
    pub clock: ManualClock,
    pub run_loop: RunLoop,
    pub scroller: Rc<AutoScroller>,
    pub delegate: Rc<RecordingDelegate>,
}

impl ScrollerHarness {
    pub fn new() -> Self {
        let clock = ManualClock::new();
        let run_loop = RunLoop::new(clock.clone());
        let scroller = AutoScroller::new(run_loop.clone());
        let delegate = Rc::new(RecordingDelegate::default());
        let weak: Weak<dyn AutoScrollDelegate> =
            Rc::downgrade(&delegate) as Weak<dyn AutoScrollDelegate>;
        scroller.set_delegate(weak);
        Self {
            clock,
            run_loop,
            scroller,
            delegate,
        }
    }

    /// Advance the clock and run one loop turn; returns timers fired.
    pub fn tick(&self, secs: f64) -> usize {
        self.clock.advance_secs(secs);
        self.run_loop.fire_due()
    }
}

/// Run the autopager binary with an isolated config directory.
///
/// Returns (stdout, stderr, exit code).
pub fn run_autopager(config_dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_autopager"))
        .args(args)
        .env("AUTOPAGER_CONFIG_DIR", config_dir.path())
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute autopager");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
