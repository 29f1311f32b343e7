//! Output formatting utilities for the CLI
//!
//! Renders phrase results either as bare text or JSON, the interval table
//! as an ASCII table, and colored status messages.

use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use rt_core::{Instant, Interval, Tense};

/// A described instant, as printed by `ago` and `until`
#[derive(Debug, Clone, Serialize)]
pub struct PhraseReport {
    pub phrase: String,
    pub tense: Tense,
    pub target: Instant,
    pub reference: Instant,
    /// Signed distance from reference to target in milliseconds
    pub delta_ms: i64,
}

impl PhraseReport {
    pub fn new(phrase: String, tense: Tense, target: Instant, reference: Instant) -> Self {
        Self {
            phrase,
            tense,
            target,
            reference,
            delta_ms: target.as_millis().saturating_sub(reference.as_millis()),
        }
    }
}

/// Format a phrase report as a single line of text or a JSON object
pub fn format_report(report: &PhraseReport, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(report)?)
    } else {
        Ok(report.phrase.clone())
    }
}

/// Format the interval table
///
/// # Arguments
/// * `intervals` - Intervals to list, largest first
/// * `json` - If true, emits a JSON array instead of an ASCII table
pub fn format_units(intervals: &[Interval], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string(intervals)?);
    }

    #[derive(Tabled)]
    struct UnitRow {
        #[tabled(rename = "UNIT")]
        unit: String,
        #[tabled(rename = "SECONDS")]
        seconds: u64,
        #[tabled(rename = "SINGULAR")]
        singular: String,
        #[tabled(rename = "PLURAL")]
        plural: String,
    }

    let rows: Vec<UnitRow> = intervals
        .iter()
        .map(|i| UnitRow {
            unit: i.unit.to_string(),
            seconds: i.seconds,
            singular: i.unit.quantity(1),
            plural: i.unit.quantity(2),
        })
        .collect();

    Ok(Table::new(rows).with(Style::rounded()).to_string())
}

/// Print a success message in green with a checkmark prefix
pub fn print_success(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stdout = std::io::stdout();
    let _ = crossterm::execute!(
        stdout,
        SetForegroundColor(Color::Green),
        Print("✓ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print an error message in red with an X prefix
///
/// Outputs to stderr.
pub fn print_error(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stderr = std::io::stderr();
    let _ = crossterm::execute!(
        stderr,
        SetForegroundColor(Color::Red),
        Print("✗ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print a warning message in yellow to stderr
pub fn print_warning(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stderr = std::io::stderr();
    let _ = crossterm::execute!(
        stderr,
        SetForegroundColor(Color::Yellow),
        Print("⚠ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}
