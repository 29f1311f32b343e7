//! `ago` and `until` command implementations

use anyhow::Result;
use clap::Args;

use crate::output::{format_report, PhraseReport};
use rt_core::config::ConfigFile;
use rt_core::{time, Formatter, Instant, MonthPolicy, Tense};

/// Arguments shared by `ago` and `until`
#[derive(Debug, Clone, Args)]
pub struct DescribeArgs {
    /// Time to describe: milliseconds since the epoch, RFC 3339, or YYYY-MM-DD
    #[arg(allow_hyphen_values = true)]
    pub time: Instant,

    /// Reference time (defaults to the current time)
    #[arg(long, allow_hyphen_values = true)]
    pub now: Option<Instant>,

    /// Read same-day dates one calendar month apart as "a month"
    #[arg(long)]
    pub calendar: bool,
}

/// Build the phrase report for `args` without printing it
pub fn describe(tense: Tense, args: &DescribeArgs, settings: &ConfigFile) -> Result<PhraseReport> {
    let reference = args.now.unwrap_or_else(time::now);

    let mut format = settings.format.clone();
    if args.calendar {
        format.month_policy = MonthPolicy::Calendar;
    }

    let phrase = Formatter::new(format).describe(tense, args.time, reference)?;
    tracing::info!(%tense, target = %args.time, %reference, "{}", phrase);

    Ok(PhraseReport::new(phrase, tense, args.time, reference))
}

/// Describe a time and print the result
pub fn describe_command(
    tense: Tense,
    args: &DescribeArgs,
    settings: &ConfigFile,
    json: bool,
) -> Result<()> {
    let report = describe(tense, args, settings)?;
    println!("{}", format_report(&report, json || settings.output.json)?);
    Ok(())
}
