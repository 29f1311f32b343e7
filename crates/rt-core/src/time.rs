//! Clock access for reltime
//!
//! The formatter never reads the clock itself. Front ends call into this
//! module once and pass the result along as the reference instant.

use chrono::Utc;

use crate::instant::Instant;

/// The current time as a structured instant.
///
/// # Examples
/// ```
/// use rt_core::time::now;
///
/// assert!(now().is_structured());
/// ```
pub fn now() -> Instant {
    Instant::DateTime(Utc::now())
}

/// Get the current Unix timestamp in milliseconds.
pub fn current_time_millis() -> i64 {
    Utc::now().timestamp_millis()
}
