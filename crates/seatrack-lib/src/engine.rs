use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::distance::DistanceTable;
use crate::error::Result;
use crate::eta::{estimate_arrival, AVERAGE_SPEED_KNOTS};
use crate::progress::{compute_progress_at, RouteProgress};
use crate::route::{total_distance, Route};

/// Shared route distance and ETA engine.
///
/// Holds an immutable distance table injected at construction. Every caller
/// that needs distances or ETAs (shipment record updates, display, CLI) goes
/// through the same engine so the figures always agree.
///
/// ```
/// use seatrack_lib::{EtaEngine, Route};
///
/// let engine = EtaEngine::default();
/// let route = Route::new(["Mumbai", "Singapore", "Colombo"]).unwrap();
/// assert_eq!(engine.total_distance(&route), 3000.0);
/// ```
#[derive(Debug, Clone)]
pub struct EtaEngine {
    table: Arc<DistanceTable>,
}

impl Default for EtaEngine {
    fn default() -> Self {
        Self::new(DistanceTable::builtin())
    }
}

impl EtaEngine {
    pub fn new(table: Arc<DistanceTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &DistanceTable {
        &self.table
    }

    /// Distance for the ordered pair `from -> to`, with the default fallback.
    pub fn lookup(&self, from: &str, to: &str) -> f64 {
        self.table.lookup(from, to)
    }

    /// Total distance over every leg of `route`.
    pub fn total_distance(&self, route: &Route) -> f64 {
        total_distance(&self.table, route.ports())
    }

    /// Arrival time for `distance_nm` at the fixed average speed.
    pub fn estimate_arrival(&self, distance_nm: f64, start: DateTime<Utc>) -> Result<DateTime<Utc>> {
        estimate_arrival(distance_nm, start, AVERAGE_SPEED_KNOTS)
    }

    /// Scheduled delivery time for the whole route from `departure_time`.
    pub fn scheduled_arrival(
        &self,
        route: &Route,
        departure_time: DateTime<Utc>,
    ) -> Result<DateTime<Utc>> {
        self.estimate_arrival(self.total_distance(route), departure_time)
    }

    /// Progress report with the remaining ETA measured from the wall clock.
    pub fn compute_progress(
        &self,
        route: &Route,
        current_location: &str,
        departure_time: DateTime<Utc>,
    ) -> Result<RouteProgress> {
        self.compute_progress_at(route, current_location, departure_time, Utc::now())
    }

    /// Progress report with an explicit reference time for the remaining ETA.
    pub fn compute_progress_at(
        &self,
        route: &Route,
        current_location: &str,
        departure_time: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<RouteProgress> {
        compute_progress_at(&self.table, route, current_location, departure_time, now)
    }
}
