//! Time spent on each page between automatic advances.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Duration spent on each page during auto scrolling.
///
/// Stored in config files and accepted on the command line as `short`,
/// `long`, or a number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IntermissionDuration {
    /// 5 seconds
    #[default]
    Short,
    /// 10 seconds
    Long,
    /// Any number of seconds.
    ///
    /// Not validated: zero, negative or NaN values are accepted and produce
    /// a timer that fires on every run-loop turn. Values too large to
    /// represent saturate, so the timer never comes due.
    Custom(f64),
}

impl IntermissionDuration {
    /// The duration in seconds, exactly as configured.
    pub fn seconds(self) -> f64 {
        match self {
            Self::Short => 5.0,
            Self::Long => 10.0,
            Self::Custom(secs) => secs,
        }
    }

    /// The duration as a timer interval.
    ///
    /// Zero, negative and NaN values resolve to zero. Positive values too
    /// large for a `Duration` (including infinity) saturate to
    /// `Duration::MAX`.
    pub fn interval(self) -> Duration {
        let secs = self.seconds();
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

/// Error returned when a duration string is neither a preset nor a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid intermission duration '{0}': expected 'short', 'long' or a number of seconds")]
pub struct DurationParseError(pub String);

impl FromStr for IntermissionDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => other
                .trim_end_matches('s')
                .parse::<f64>()
                .map(Self::Custom)
                .map_err(|_| DurationParseError(trimmed.to_string())),
        }
    }
}

impl TryFrom<String> for IntermissionDuration {
    type Error = DurationParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IntermissionDuration> for String {
    fn from(value: IntermissionDuration) -> Self {
        value.to_string()
    }
}

impl fmt::Display for IntermissionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => f.write_str("short"),
            Self::Long => f.write_str("long"),
            Self::Custom(secs) => write!(f, "{}", secs),
        }
    }
}
