//! Default command: sync review tasks to the gist

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{resolve_env, Settings};
use crate::review::{Clock, ReferenceDates, SystemClock};
use crate::sync::{build_classification, sync};

#[derive(Args)]
pub struct SyncArgs {
    /// Settings file with KEY=VALUE lines (environment variables take precedence)
    #[arg(long, env = "REVIEW_SYNC_ENV_FILE", default_value = ".env")]
    pub env_file: PathBuf,

    /// Print the JSON snapshot instead of publishing it
    #[arg(long)]
    pub dry_run: bool,

    /// Reference date (YYYY-MM-DD) instead of the current date in UTC+9
    #[arg(long, value_name = "DATE", value_parser = parse_reference_date)]
    pub today: Option<NaiveDate>,
}

/// A reference date must have a following day to serve as "tomorrow".
fn parse_reference_date(value: &str) -> std::result::Result<NaiveDate, String> {
    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))?;
    if day.succ_opt().is_none() {
        return Err(format!("{} has no following day", day));
    }
    Ok(day)
}

pub async fn run(args: SyncArgs) -> Result<()> {
    let env = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
    run_with(args, &SystemClock, env, &mut std::io::stdout()).await
}

/// Same as [`run`], with the clock, environment and output supplied by the caller.
pub async fn run_with<C, I, W>(args: SyncArgs, clock: &C, env: I, out: &mut W) -> Result<()>
where
    C: Clock,
    I: IntoIterator<Item = (String, String)>,
    W: Write,
{
    let values = resolve_env(&args.env_file, env)?;
    let reference = reference_dates(clock, args.today);

    if args.dry_run {
        let settings = Settings::from_map_without_token(&values);
        debug!("Dry run against {:?}", settings.review_file());
        let snapshot = build_classification(&settings, reference)?.into_snapshot();
        writeln!(out, "{}", snapshot.to_json()?)?;
        return Ok(());
    }

    let settings = Settings::from_map(&values)?;
    let outcome = sync(&settings, reference).await?;

    // On a first run this is the ID to put in REVIEW_GIST_ID
    writeln!(out, "Gist ID: {}", outcome.gist_id)?;
    Ok(())
}

/// Reference dates from the clock, or from an explicit day when given
pub fn reference_dates<C: Clock>(clock: &C, today: Option<NaiveDate>) -> ReferenceDates {
    let now = clock.now();
    match today {
        Some(day) => ReferenceDates::for_day(now, day),
        None => ReferenceDates::at(now),
    }
}
