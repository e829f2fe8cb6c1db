use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use seatrack_cli::output::OutputFormat;
use seatrack_cli::terminal::ColorPalette;

mod commands;

use commands::parse_timestamp;
use commands::progress::ProgressCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shipment route distance, progress and ETA utilities")]
struct Cli {
    /// Load an alternate distance table (JSON or CSV) instead of the built-in one.
    #[arg(long, global = true, env = "SEATRACK_DISTANCES")]
    distances: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable ANSI colors in enhanced output (the NO_COLOR variable also works).
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up the distance between two ports.
    Distance {
        /// Origin port name (case-sensitive).
        #[arg(long = "from")]
        from: String,
        /// Destination port name (case-sensitive).
        #[arg(long = "to")]
        to: String,
    },
    /// Compute the total distance and scheduled arrival for a route.
    Route {
        /// Comma-separated ports in traversal order, e.g. "Mumbai,Singapore,Colombo".
        #[arg(long)]
        ports: String,
        /// Departure time (RFC 3339); defaults to now.
        #[arg(long, value_parser = parse_timestamp)]
        departure: Option<DateTime<Utc>>,
    },
    /// Report progress and ETAs for a shipment at a port on its route.
    Progress {
        /// Comma-separated ports in traversal order.
        #[arg(long)]
        ports: String,
        /// Port the shipment is currently at.
        #[arg(long)]
        at: String,
        /// Departure time from the origin (RFC 3339).
        #[arg(long, value_parser = parse_timestamp)]
        departure: DateTime<Utc>,
        /// Reference time for the remaining ETA (RFC 3339); defaults to now.
        #[arg(long, value_parser = parse_timestamp)]
        now: Option<DateTime<Utc>>,
    },
    /// Describe the time left until an ETA.
    Remaining {
        /// Estimated arrival (RFC 3339); omit when no ETA is known yet.
        #[arg(long, value_parser = parse_timestamp)]
        eta: Option<DateTime<Utc>>,
        /// Reference time (RFC 3339); defaults to now.
        #[arg(long, value_parser = parse_timestamp)]
        now: Option<DateTime<Utc>>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match cli.command {
        Command::Distance { from, to } => {
            let engine = commands::load_engine(cli.distances.as_deref())?;
            commands::distance::handle_distance(&engine, &from, &to, cli.format)
        }
        Command::Route { ports, departure } => {
            let engine = commands::load_engine(cli.distances.as_deref())?;
            let departure = departure.unwrap_or_else(Utc::now);
            commands::route::handle_route(&engine, &ports, departure, cli.format)
        }
        Command::Progress {
            ports,
            at,
            departure,
            now,
        } => {
            let engine = commands::load_engine(cli.distances.as_deref())?;
            let args = ProgressCommandArgs {
                ports,
                at,
                departure,
                now,
            };
            commands::progress::handle_progress(&engine, &args, cli.format, palette)
        }
        Command::Remaining { eta, now } => {
            commands::remaining::handle_remaining(eta, now, cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
