//! Colors for the pager TUI and CLI output
//!
//! Provides both ratatui styles (for the demo) and ANSI escape codes
//! (for `autopager config` output).

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::scroller::ScrollerState;

/// Named theme presets selectable from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Meadow,
    Classic,
    Ocean,
}

/// Theme configuration for the pager.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Page body and labels
    pub text_primary: Color,
    /// Footer hints and secondary labels
    pub text_secondary: Color,
    /// Current page marker, key hints
    pub accent: Color,
    /// Countdown bar while auto scrolling
    pub running: Color,
    /// Countdown bar while a resume is pending
    pub paused: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::meadow()
    }
}

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Meadow => Self::meadow(),
            ThemeName::Classic => Self::classic(),
            ThemeName::Ocean => Self::ocean(),
        }
    }

    /// Gray text with green accents.
    pub fn meadow() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            running: Color::Green,
            paused: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// White text, yellow accents.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            running: Color::Yellow,
            paused: Color::Magenta,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            running: Color::LightBlue,
            paused: Color::LightMagenta,
            error: Color::Red,
            success: Color::Green,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Color for the countdown bar in a given scroller state.
    pub fn state_color(&self, state: ScrollerState) -> Color {
        match state {
            ScrollerState::Running => self.running,
            ScrollerState::StoppedPendingRestart => self.paused,
            ScrollerState::Stopped => self.text_secondary,
        }
    }

    // ANSI helpers for CLI output

    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Wrap `text` in the ANSI code for `color`. Honors `NO_COLOR`.
fn paint(color: Color, text: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return text.to_string();
    }
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}
