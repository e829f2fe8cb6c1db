// Module exports for CLI subcommands
//
// Each module handles one subcommand; main.rs parses arguments and dispatches here.

pub mod distance;
pub mod progress;
pub mod remaining;
pub mod route;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use seatrack_lib::{DistanceTable, EtaEngine};
use tracing::debug;

/// Build the engine from an optional alternate distance table.
pub fn load_engine(distances: Option<&Path>) -> Result<EtaEngine> {
    match distances {
        Some(path) => {
            let table = DistanceTable::from_path(path)
                .with_context(|| format!("failed to load distance table from {}", path.display()))?;
            Ok(EtaEngine::new(Arc::new(table)))
        }
        None => {
            debug!("using built-in distance table");
            Ok(EtaEngine::default())
        }
    }
}

/// Parse an RFC 3339 timestamp argument into UTC.
pub fn parse_timestamp(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| format!("expected an RFC 3339 timestamp such as 2025-07-01T06:00:00Z: {err}"))
}
