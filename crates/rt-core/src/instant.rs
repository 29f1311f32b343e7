//! Points in time accepted by the formatter

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use crate::error::InstantParseError;

/// A point in time, either a raw millisecond count or a structured UTC date.
///
/// Both forms are normalized to milliseconds since the Unix epoch before any
/// arithmetic. The structured form additionally keeps its calendar fields,
/// which [`MonthPolicy::Calendar`](crate::MonthPolicy::Calendar) relies on.
///
/// Equality is structural: `Millis(0)` and the epoch as a `DateTime` are
/// different values that normalize to the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instant {
    /// Milliseconds since 1970-01-01T00:00:00Z
    Millis(i64),
    /// Structured UTC date and time
    DateTime(DateTime<Utc>),
}

impl Instant {
    /// Milliseconds since the Unix epoch
    pub fn as_millis(&self) -> i64 {
        match self {
            Instant::Millis(ms) => *ms,
            Instant::DateTime(dt) => dt.timestamp_millis(),
        }
    }

    /// The structured value, if this instant was given as one
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Instant::Millis(_) => None,
            Instant::DateTime(dt) => Some(dt),
        }
    }

    /// Whether this instant carries calendar fields
    pub fn is_structured(&self) -> bool {
        matches!(self, Instant::DateTime(_))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instant::Millis(ms) => write!(f, "{}", ms),
            Instant::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl From<i64> for Instant {
    fn from(ms: i64) -> Self {
        Instant::Millis(ms)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Instant::DateTime(dt)
    }
}

impl From<SystemTime> for Instant {
    fn from(t: SystemTime) -> Self {
        Instant::DateTime(DateTime::<Utc>::from(t))
    }
}

impl FromStr for Instant {
    type Err = InstantParseError;

    /// Parses a millisecond count, an RFC 3339 timestamp, a naive
    /// `YYYY-MM-DDTHH:MM:SS` (taken as UTC) or a bare `YYYY-MM-DD` (UTC midnight).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(ms) = s.parse::<i64>() {
            return Ok(Instant::Millis(ms));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Instant::DateTime(dt.with_timezone(&Utc)));
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Instant::DateTime(Utc.from_utc_datetime(&naive)));
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Instant::DateTime(Utc.from_utc_datetime(&naive)))
            .ok_or_else(|| InstantParseError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_millis() {
        let instant: Instant = "1740182400000".parse().unwrap();
        assert_eq!(instant, Instant::Millis(1_740_182_400_000));
        assert!(!instant.is_structured());
    }

    #[test]
    fn test_parse_negative_millis() {
        let instant: Instant = "-1000".parse().unwrap();
        assert_eq!(instant.as_millis(), -1000);
    }

    #[test]
    fn test_parse_date_is_utc_midnight() {
        let instant: Instant = "2025-02-22".parse().unwrap();
        assert!(instant.is_structured());
        assert_eq!(instant.as_millis(), 1_740_182_400_000);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let instant: Instant = "2025-02-22T02:00:00+02:00".parse().unwrap();
        assert_eq!(instant.as_millis(), 1_740_182_400_000);
    }

    #[test]
    fn test_parse_naive_datetime() {
        let instant: Instant = "2025-02-22T00:00:01".parse().unwrap();
        assert_eq!(instant.as_millis(), 1_740_182_401_000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "yesterday".parse::<Instant>().unwrap_err();
        assert_eq!(err.input, "yesterday");
        assert!("2025-02-30".parse::<Instant>().is_err());
    }

    #[test]
    fn test_system_time_normalizes_to_millis() {
        let t = SystemTime::UNIX_EPOCH + std::time::Duration::from_millis(1_500);
        assert_eq!(Instant::from(t).as_millis(), 1_500);
    }

    #[test]
    fn test_serde_untagged() {
        let ms: Instant = serde_json::from_str("42").unwrap();
        assert_eq!(ms, Instant::Millis(42));

        let dt: Instant = serde_json::from_str(r#""2025-02-22T00:00:00Z""#).unwrap();
        assert_eq!(dt.as_millis(), 1_740_182_400_000);
    }
}
