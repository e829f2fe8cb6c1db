//! Distance command handler for a single port-pair lookup.

use anyhow::Result;
use serde::Serialize;

use seatrack_lib::output::format_with_separators;
use seatrack_lib::{distance_key, eta::whole_hours, travel_hours, EtaEngine, AVERAGE_SPEED_KNOTS};

use seatrack_cli::output::{to_json, OutputFormat};

/// Result of looking up one ordered port pair.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceReport {
    pub from: String,
    pub to: String,
    pub key: String,
    pub distance_nm: f64,
    pub hours: f64,
    /// True when the pair has no table entry and the default distance applied.
    pub is_default: bool,
}

/// Handle the distance subcommand.
pub fn handle_distance(engine: &EtaEngine, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let report = build_report(engine, from, to);
    let rendered = match format {
        OutputFormat::Json => to_json(&report)?,
        OutputFormat::Compact => format_compact(&report),
        OutputFormat::Text | OutputFormat::Enhanced => format_text(&report),
    };
    print!("{rendered}");
    Ok(())
}

pub fn build_report(engine: &EtaEngine, from: &str, to: &str) -> DistanceReport {
    let distance_nm = engine.lookup(from, to);
    DistanceReport {
        from: from.to_string(),
        to: to.to_string(),
        key: distance_key(from, to),
        distance_nm,
        hours: whole_hours(travel_hours(distance_nm, AVERAGE_SPEED_KNOTS)),
        is_default: !engine.table().contains(from, to),
    }
}

fn format_text(report: &DistanceReport) -> String {
    let note = if report.is_default {
        ", no table entry; default applied"
    } else {
        ""
    };
    format!(
        "{}: {} nm ({} h{})\n",
        report.key,
        format_with_separators(report.distance_nm),
        report.hours,
        note
    )
}

fn format_compact(report: &DistanceReport) -> String {
    format!(
        "{} {} nm {} h{}\n",
        report.key,
        format_with_separators(report.distance_nm),
        report.hours,
        if report.is_default { " (default)" } else { "" }
    )
}
