//! Auto-scroller states and the pending-restart policy.

use serde::{Deserialize, Serialize};

use crate::runloop::Timer;

/// Observable state of an auto scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollerState {
    /// No timer scheduled, nothing to resume.
    #[default]
    Stopped,
    /// Timer scheduled and firing.
    Running,
    /// Stopped by a user scroll; the next scroll end may resume it.
    StoppedPendingRestart,
}

impl ScrollerState {
    /// Short label for status lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::StoppedPendingRestart => "paused",
        }
    }
}

/// What an explicit `enable()` does to a restart that is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PendingRestartPolicy {
    /// Enabling discards the pending restart.
    #[default]
    ClearOnEnable,
    /// The pending restart survives an explicit enable, so a later
    /// `disable()` leaves the scroller resumable by the next scroll end.
    KeepOnEnable,
}

/// Internal phase; owns the timer while running.
#[derive(Debug, Default)]
pub(crate) enum Phase {
    #[default]
    Stopped,
    StoppedPendingRestart,
    Running {
        timer: Timer,
        restart_pending: bool,
    },
}

impl Phase {
    pub(crate) fn state(&self) -> ScrollerState {
        match self {
            Self::Stopped => ScrollerState::Stopped,
            Self::StoppedPendingRestart => ScrollerState::StoppedPendingRestart,
            Self::Running { .. } => ScrollerState::Running,
        }
    }

    pub(crate) fn restart_pending(&self) -> bool {
        match self {
            Self::Stopped => false,
            Self::StoppedPendingRestart => true,
            Self::Running {
                restart_pending, ..
            } => *restart_pending,
        }
    }

    pub(crate) fn timer(&self) -> Option<&Timer> {
        match self {
            Self::Running { timer, .. } => Some(timer),
            _ => None,
        }
    }
}
