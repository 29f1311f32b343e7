//! `units` command implementation

use anyhow::Result;

use crate::output::format_units;
use rt_core::INTERVALS;

/// Print the interval table used to pick a phrase's unit
pub fn units_command(json: bool) -> Result<()> {
    println!("{}", format_units(&INTERVALS, json)?);
    Ok(())
}
