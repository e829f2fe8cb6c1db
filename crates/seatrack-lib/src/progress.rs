//! Route progress reporting.
//!
//! A [`RouteProgress`] describes how far a shipment has travelled along its
//! route: which legs are complete, how much distance remains, the static
//! scheduled arrival (from the departure time) and the live remaining ETA
//! (from the supplied "now").
//!
//! When the current location is the final port, or is not on the route at
//! all, there is no further travel: `remaining_distance` is `0` and
//! `remaining_eta` is `None`. Callers should read that as "arrived / nothing
//! left to estimate", not as a failure.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::distance::DistanceTable;
use crate::error::Result;
use crate::eta::{estimate_arrival, hours_to_days, travel_hours, whole_hours, AVERAGE_SPEED_KNOTS};
use crate::route::{total_distance, Route};

/// One leg of a route and whether it has been sailed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentProgress {
    pub index: usize,
    pub from: String,
    pub to: String,
    /// Leg distance in nautical miles.
    pub distance: f64,
    /// Leg duration rounded to whole hours.
    pub hours: f64,
    /// Leg duration in days, one decimal place.
    pub days: f64,
    /// True when the leg starts before the current port.
    pub completed: bool,
}

/// Progress and ETA figures for a shipment on a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteProgress {
    pub current_location: String,
    /// Index of the current location in the route, if it is on the route.
    pub current_index: Option<usize>,
    pub total_distance: f64,
    pub total_hours: f64,
    pub total_days: f64,
    /// Scheduled arrival computed from the departure time.
    pub total_eta: DateTime<Utc>,
    pub remaining_distance: f64,
    pub remaining_hours: f64,
    pub remaining_days: f64,
    /// Live arrival estimate from "now"; `None` once there is nothing left to sail.
    pub remaining_eta: Option<DateTime<Utc>>,
    pub completed_segments: usize,
    pub percent_complete: f64,
    pub segments: Vec<SegmentProgress>,
}

impl RouteProgress {
    /// True when there is no remaining travel to estimate.
    pub fn has_arrived(&self) -> bool {
        self.remaining_eta.is_none()
    }

    /// Number of legs on the route.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Compute progress for `current_location` along `route`, using `now` as the
/// reference time for the remaining ETA.
pub fn compute_progress_at(
    table: &DistanceTable,
    route: &Route,
    current_location: &str,
    departure_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<RouteProgress> {
    let current_index = route.position(current_location);
    if current_index.is_none() {
        debug!(
            location = current_location,
            route = %route,
            "current location is not on the route; no remaining ETA"
        );
    }

    let segments: Vec<SegmentProgress> = route
        .segments()
        .enumerate()
        .map(|(index, (from, to))| {
            let distance = table.lookup(from, to);
            let hours = travel_hours(distance, AVERAGE_SPEED_KNOTS);
            SegmentProgress {
                index,
                from: from.to_string(),
                to: to.to_string(),
                distance,
                hours: whole_hours(hours),
                days: hours_to_days(hours),
                completed: current_index.is_some_and(|idx| index < idx),
            }
        })
        .collect();

    let completed_segments = segments.iter().filter(|seg| seg.completed).count();
    let percent_complete = completed_segments as f64 / route.segment_count() as f64 * 100.0;

    let total = total_distance(table, route.ports());
    let total_hours = travel_hours(total, AVERAGE_SPEED_KNOTS);
    let total_eta = estimate_arrival(total, departure_time, AVERAGE_SPEED_KNOTS)?;

    let remaining_distance = match current_index {
        Some(idx) => total_distance(table, &route.ports()[idx..]),
        None => 0.0,
    };
    let remaining_hours = travel_hours(remaining_distance, AVERAGE_SPEED_KNOTS);
    let remaining_eta = match current_index {
        Some(idx) if idx + 1 < route.port_count() => Some(estimate_arrival(
            remaining_distance,
            now,
            AVERAGE_SPEED_KNOTS,
        )?),
        _ => None,
    };

    Ok(RouteProgress {
        current_location: current_location.to_string(),
        current_index,
        total_distance: total,
        total_hours: whole_hours(total_hours),
        total_days: hours_to_days(total_hours),
        total_eta,
        remaining_distance,
        remaining_hours: whole_hours(remaining_hours),
        remaining_days: hours_to_days(remaining_hours),
        remaining_eta,
        completed_segments,
        percent_complete,
        segments,
    })
}
