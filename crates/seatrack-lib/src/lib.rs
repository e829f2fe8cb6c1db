//! Seatrack library entry points.
//!
//! This crate computes route distances, scheduled and live ETAs, and progress
//! reports for cargo shipments sailing along an ordered list of ports. Higher
//! level consumers (the CLI, persistence hooks, display code) should go
//! through [`EtaEngine`] instead of reimplementing the formulas.
//!

#![deny(warnings)]

pub mod distance;
pub mod engine;
pub mod error;
pub mod eta;
pub mod output;
pub mod progress;
pub mod route;
pub mod shipment;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use distance::{distance_key, DistanceTable, DEFAULT_DISTANCE_NM, DEFAULT_KEY};
pub use engine::EtaEngine;
pub use error::{Error, Result};
pub use eta::{estimate_arrival, travel_duration, travel_hours, AVERAGE_SPEED_KNOTS};
pub use output::{format_time_remaining, format_timestamp, ProgressRenderMode};
pub use progress::{compute_progress_at, RouteProgress, SegmentProgress};
pub use route::{total_distance, Route};
pub use shipment::{NewShipment, Shipment, ShipmentStatus};
