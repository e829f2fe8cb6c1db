//! Route command handler for total distance and scheduled arrival.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use seatrack_lib::eta::{hours_to_days, whole_hours};
use seatrack_lib::output::format_with_separators;
use seatrack_lib::{format_timestamp, travel_hours, EtaEngine, Route, AVERAGE_SPEED_KNOTS};

use seatrack_cli::output::{to_json, OutputFormat};

/// Summary of a full route from a departure time.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub route: Route,
    pub legs: usize,
    pub total_distance: f64,
    pub total_hours: f64,
    pub total_days: f64,
    pub departure_time: DateTime<Utc>,
    pub scheduled_arrival: DateTime<Utc>,
}

/// Handle the route subcommand.
pub fn handle_route(
    engine: &EtaEngine,
    ports: &str,
    departure_time: DateTime<Utc>,
    format: OutputFormat,
) -> Result<()> {
    let route = Route::parse_list(ports).context("invalid --ports list")?;
    let report = build_report(engine, route, departure_time)?;
    let rendered = match format {
        OutputFormat::Json => to_json(&report)?,
        OutputFormat::Compact => format_compact(&report),
        OutputFormat::Text | OutputFormat::Enhanced => format_text(&report),
    };
    print!("{rendered}");
    Ok(())
}

pub fn build_report(
    engine: &EtaEngine,
    route: Route,
    departure_time: DateTime<Utc>,
) -> Result<RouteReport> {
    let total_distance = engine.total_distance(&route);
    let hours = travel_hours(total_distance, AVERAGE_SPEED_KNOTS);
    let scheduled_arrival = engine
        .estimate_arrival(total_distance, departure_time)
        .context("failed to estimate arrival")?;

    Ok(RouteReport {
        legs: route.segment_count(),
        route,
        total_distance,
        total_hours: whole_hours(hours),
        total_days: hours_to_days(hours),
        departure_time,
        scheduled_arrival,
    })
}

fn format_text(report: &RouteReport) -> String {
    format!(
        "Route: {} ({} legs)\nTotal distance: {} nm ({} h, {} d)\nDeparture: {}\nScheduled arrival: {}\n",
        report.route,
        report.legs,
        format_with_separators(report.total_distance),
        report.total_hours,
        report.total_days,
        format_timestamp(report.departure_time),
        format_timestamp(report.scheduled_arrival)
    )
}

fn format_compact(report: &RouteReport) -> String {
    format!(
        "{} {} legs, {} nm, arrives {}\n",
        report.route,
        report.legs,
        format_with_separators(report.total_distance),
        format_timestamp(report.scheduled_arrival)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn report_includes_scheduled_arrival() {
        let departure = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let route = Route::parse_list("Mumbai,Singapore,Colombo").unwrap();
        let report = build_report(&EtaEngine::default(), route, departure).unwrap();

        assert_eq!(report.total_distance, 3000.0);
        let text = format_text(&report);
        assert!(text.contains("Route: Mumbai -> Singapore -> Colombo (2 legs)"));
        assert!(text.contains("Total distance: 3,000 nm (167 h, 6.9 d)"));
        assert!(text.contains("Scheduled arrival: 2025-07-07T22:40:00Z"));
    }

    #[test]
    fn compact_summarises_on_one_line() {
        let departure = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let route = Route::parse_list("Mumbai,Singapore,Colombo").unwrap();
        let report = build_report(&EtaEngine::default(), route, departure).unwrap();

        assert_eq!(
            format_compact(&report),
            "Mumbai -> Singapore -> Colombo 2 legs, 3,000 nm, arrives 2025-07-07T22:40:00Z\n"
        );
    }
}
