//! Relative time formatting
//!
//! Both directions share one algorithm: take the absolute distance between
//! the target and the reference in seconds, pick the largest interval that
//! fits, round to a whole count and render it with the tense's template.
//!
//! ```
//! use rt_core::{describe_elapsed, describe_remaining, Instant};
//!
//! let now = Instant::Millis(1_740_182_400_000);
//! let five_minutes = 5 * 60 * 1000;
//!
//! assert_eq!(
//!     describe_elapsed(now.as_millis() - five_minutes, now).unwrap(),
//!     "5 minutes ago"
//! );
//! assert_eq!(
//!     describe_remaining(now.as_millis() + 3_600_000, now).unwrap(),
//!     "in an hour"
//! );
//! ```

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{FormatConfig, MonthPolicy};
use crate::error::RelativeTimeError;
use crate::instant::Instant;
use crate::interval::{self, Unit};

/// Phrase returned for spans shorter than one second, in either direction
pub const JUST_NOW: &str = "just now";

/// Which side of the reference the target is expected to be on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    /// Target at or before the reference ("5 minutes ago")
    Past,
    /// Target at or after the reference ("in 5 minutes")
    Future,
}

impl Tense {
    /// The side a target may not be on
    pub(crate) fn forbidden_side(self) -> &'static str {
        match self {
            Tense::Past => "future",
            Tense::Future => "past",
        }
    }

    /// Signed distance in milliseconds; negative means the target is on the wrong side
    fn span_millis(self, target: i64, reference: i64) -> i64 {
        match self {
            Tense::Past => reference.saturating_sub(target),
            Tense::Future => target.saturating_sub(reference),
        }
    }

    fn render(self, quantity: &str) -> String {
        match self {
            Tense::Past => format!("{} ago", quantity),
            Tense::Future => format!("in {}", quantity),
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tense::Past => write!(f, "past"),
            Tense::Future => write!(f, "future"),
        }
    }
}

/// Formats the distance between two instants as an English phrase
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Create a formatter with the given options
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Options this formatter was built with
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Describe how long ago `target` was, seen from `reference`.
    ///
    /// Fails with [`RelativeTimeError::InvalidTimeRange`] if `target` is
    /// later than `reference`.
    pub fn elapsed(
        &self,
        target: impl Into<Instant>,
        reference: impl Into<Instant>,
    ) -> Result<String, RelativeTimeError> {
        self.describe(Tense::Past, target.into(), reference.into())
    }

    /// Describe how long until `target`, seen from `reference`.
    ///
    /// Fails with [`RelativeTimeError::InvalidTimeRange`] if `target` is
    /// earlier than `reference`.
    pub fn remaining(
        &self,
        target: impl Into<Instant>,
        reference: impl Into<Instant>,
    ) -> Result<String, RelativeTimeError> {
        self.describe(Tense::Future, target.into(), reference.into())
    }

    /// Shared implementation of [`elapsed`](Self::elapsed) and
    /// [`remaining`](Self::remaining).
    pub fn describe(
        &self,
        tense: Tense,
        target: Instant,
        reference: Instant,
    ) -> Result<String, RelativeTimeError> {
        let span = tense.span_millis(target.as_millis(), reference.as_millis());
        if span < 0 {
            return Err(RelativeTimeError::InvalidTimeRange(tense));
        }

        let seconds = span as f64 / 1_000.0;

        // select() only comes back empty below one second
        let Some(interval) = interval::select(seconds) else {
            return Ok(JUST_NOW.to_string());
        };

        if self.config.month_policy == MonthPolicy::Calendar {
            let (earlier, later) = match tense {
                Tense::Past => (&target, &reference),
                Tense::Future => (&reference, &target),
            };
            if let (Some(earlier), Some(later)) = (earlier.as_datetime(), later.as_datetime()) {
                if one_calendar_month_apart(earlier, later) {
                    tracing::debug!(%earlier, %later, "Calendar month anniversary");
                    return Ok(tense.render(&Unit::Month.quantity(1)));
                }
            }
        }

        let count = interval.count(seconds);
        tracing::trace!(span_ms = span, unit = %interval.unit, count, "Selected interval");

        Ok(tense.render(&interval.unit.quantity(count)))
    }
}

/// Same day of month, and `later` falls in the month right after `earlier`
fn one_calendar_month_apart(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> bool {
    let month_index = |dt: &DateTime<Utc>| i64::from(dt.year()) * 12 + i64::from(dt.month0());
    earlier.day() == later.day() && month_index(later) - month_index(earlier) == 1
}

/// Describe how long ago `target` was, seen from `reference`, with default options.
pub fn describe_elapsed(
    target: impl Into<Instant>,
    reference: impl Into<Instant>,
) -> Result<String, RelativeTimeError> {
    Formatter::default().elapsed(target, reference)
}

/// Describe how long until `target`, seen from `reference`, with default options.
pub fn describe_remaining(
    target: impl Into<Instant>,
    reference: impl Into<Instant>,
) -> Result<String, RelativeTimeError> {
    Formatter::default().remaining(target, reference)
}
