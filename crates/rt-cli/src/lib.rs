//! reltime: Command-line interface for rt-core
//!
//! Provides the `reltime` CLI for describing timestamps relative to now
//! or to an explicit reference time.

pub mod commands;
pub mod output;
