//! Progress command handler for a shipment's position along its route.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::warn;

use seatrack_lib::{EtaEngine, Route};

use seatrack_cli::output::OutputFormat;
use seatrack_cli::terminal::ColorPalette;

/// Arguments for the progress command.
#[derive(Debug, Clone)]
pub struct ProgressCommandArgs {
    /// Comma-separated route, in traversal order.
    pub ports: String,
    /// Port the shipment is currently at.
    pub at: String,
    /// Departure time from the origin port.
    pub departure: DateTime<Utc>,
    /// Reference time for the remaining ETA; wall clock when absent.
    pub now: Option<DateTime<Utc>>,
}

/// Handle the progress subcommand.
pub fn handle_progress(
    engine: &EtaEngine,
    args: &ProgressCommandArgs,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let route = Route::parse_list(&args.ports).context("invalid --ports list")?;
    if !route.contains(&args.at) {
        warn!(
            location = %args.at,
            route = %route,
            "current location is not on the route; no remaining ETA"
        );
    }

    let now = args.now.unwrap_or_else(Utc::now);
    let progress = engine
        .compute_progress_at(&route, &args.at, args.departure, now)
        .context("failed to compute route progress")?;

    let rendered = format
        .render_progress(&progress, palette)
        .context("failed to render progress report")?;
    print!("{rendered}");
    Ok(())
}
