//! Core error types for reltime

use std::path::PathBuf;
use thiserror::Error;

use crate::format::Tense;

/// Top-level error type for the reltime crates
#[derive(Error, Debug)]
pub enum RtError {
    /// Formatting error
    #[error(transparent)]
    Format(#[from] RelativeTimeError),

    /// Instant parse error
    #[error(transparent)]
    Parse(#[from] InstantParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while describing the distance between two instants
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTimeError {
    /// The target lies on the wrong side of the reference for the requested tense
    #[error("Time cannot be in the {}", .0.forbidden_side())]
    InvalidTimeRange(Tense),
}

/// An instant string that is neither a millisecond count nor a date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid instant {input:?}: expected milliseconds, an RFC 3339 timestamp or YYYY-MM-DD")]
pub struct InstantParseError {
    /// The rejected input
    pub input: String,
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Invalid configuration
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialize error
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
