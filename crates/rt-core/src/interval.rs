//! Named duration buckets used to pick the unit of a phrase

use serde::{Deserialize, Serialize};
use std::fmt;

const SECOND: u64 = 1;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// A unit of time that can appear in a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Singular English name
    pub fn name(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }

    /// Fixed length of the unit in seconds (30-day months, 365-day years)
    pub fn seconds(self) -> u64 {
        match self {
            Unit::Year => YEAR,
            Unit::Month => MONTH,
            Unit::Week => WEEK,
            Unit::Day => DAY,
            Unit::Hour => HOUR,
            Unit::Minute => MINUTE,
            Unit::Second => SECOND,
        }
    }

    /// Indefinite article used when the count is one
    pub fn article(self) -> &'static str {
        match self {
            Unit::Hour => "an",
            _ => "a",
        }
    }

    /// "a week", "an hour", "2 days"
    pub fn quantity(self, count: u64) -> String {
        if count == 1 {
            format!("{} {}", self.article(), self.name())
        } else {
            format!("{} {}s", count, self.name())
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit paired with its length in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub unit: Unit,
    pub seconds: u64,
}

impl Interval {
    const fn new(unit: Unit, seconds: u64) -> Self {
        Self { unit, seconds }
    }

    /// Number of whole units in `seconds`, rounded half up.
    pub fn count(&self, seconds: f64) -> u64 {
        (seconds / self.seconds as f64).round() as u64
    }
}

/// Every interval, largest first.
pub const INTERVALS: [Interval; 7] = [
    Interval::new(Unit::Year, YEAR),
    Interval::new(Unit::Month, MONTH),
    Interval::new(Unit::Week, WEEK),
    Interval::new(Unit::Day, DAY),
    Interval::new(Unit::Hour, HOUR),
    Interval::new(Unit::Minute, MINUTE),
    Interval::new(Unit::Second, SECOND),
];

/// Largest interval that fits into `seconds`.
///
/// Returns `None` only for spans shorter than one second.
pub fn select(seconds: f64) -> Option<Interval> {
    INTERVALS
        .iter()
        .copied()
        .find(|interval| seconds >= interval.seconds as f64)
}
