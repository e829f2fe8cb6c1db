//! Remaining command handler for the "time remaining" label.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use seatrack_lib::format_time_remaining;

use seatrack_cli::output::{to_json, OutputFormat};

#[derive(Debug, Serialize)]
struct RemainingReport {
    eta: Option<DateTime<Utc>>,
    label: String,
}

/// Handle the remaining subcommand.
pub fn handle_remaining(
    eta: Option<DateTime<Utc>>,
    now: Option<DateTime<Utc>>,
    format: OutputFormat,
) -> Result<()> {
    let label = format_time_remaining(eta, now.unwrap_or_else(Utc::now));
    match format {
        OutputFormat::Json => print!("{}", to_json(&RemainingReport { eta, label })?),
        _ => println!("{label}"),
    }
    Ok(())
}
