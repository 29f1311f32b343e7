//! rt-core: Relative time phrases for reltime
//!
//! Turns the distance between two instants into an English phrase such as
//! "5 minutes ago" or "in a week". The reference instant is always passed
//! in by the caller; nothing in this crate reads the clock except
//! [`time::now`].

pub mod config;
pub mod error;
pub mod format;
pub mod instant;
pub mod interval;
pub mod time;

pub use config::{FormatConfig, MonthPolicy};
pub use error::{RelativeTimeError, RtError};
pub use format::{describe_elapsed, describe_remaining, Formatter, Tense, JUST_NOW};
pub use instant::Instant;
pub use interval::{Interval, Unit, INTERVALS};
