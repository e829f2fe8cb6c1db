//! Shipment records and their derived ETA fields.
//!
//! A [`Shipment`] owns its route, current location and departure time. The
//! `estimated_delivery_time` and `current_eta` fields are derived: they are
//! recomputed by the [`EtaEngine`] whenever the route or the current location
//! changes and cannot be set directly.
//!
//! Location updates must move forward along the route. The engine itself does
//! not check this; the record does, so that progress stays monotonic.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::EtaEngine;
use crate::error::{Error, Result};
use crate::progress::RouteProgress;
use crate::route::Route;

/// Lifecycle status of a shipment.
///
/// `Pending -> In Transit -> {Delayed <-> In Transit} -> Delivered -> Received`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShipmentStatus {
    #[default]
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delayed,
    Delivered,
    Received,
}

impl ShipmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Delayed => "Delayed",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Received => "Received",
        }
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: ShipmentStatus) -> bool {
        use ShipmentStatus::*;
        matches!(
            (self, next),
            (Pending, InTransit)
                | (InTransit, Delayed)
                | (Delayed, InTransit)
                | (InTransit, Delivered)
                | (Delayed, Delivered)
                | (Delivered, Received)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ShipmentStatus::Received)
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(ShipmentStatus::Pending),
            "intransit" => Ok(ShipmentStatus::InTransit),
            "delayed" => Ok(ShipmentStatus::Delayed),
            "delivered" => Ok(ShipmentStatus::Delivered),
            "received" => Ok(ShipmentStatus::Received),
            _ => Err(format!("unknown shipment status: {s}")),
        }
    }
}

/// Fields supplied when registering a new shipment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewShipment {
    pub shipment_id: String,
    pub container_id: String,
    pub route: Route,
    /// Defaults to the route origin.
    #[serde(default)]
    pub current_location: Option<String>,
    pub departure_time: DateTime<Utc>,
    #[serde(default)]
    pub status: ShipmentStatus,
    /// Opaque reference to an uploaded image, stored by an external collaborator.
    #[serde(default)]
    pub image: Option<String>,
}

impl NewShipment {
    pub fn new(
        shipment_id: impl Into<String>,
        container_id: impl Into<String>,
        route: Route,
        departure_time: DateTime<Utc>,
    ) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            container_id: container_id.into(),
            route,
            current_location: None,
            departure_time,
            status: ShipmentStatus::default(),
            image: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.current_location = Some(location.into());
        self
    }
}

/// A tracked shipment with engine-derived delivery estimates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shipment {
    shipment_id: String,
    container_id: String,
    route: Route,
    current_location: String,
    departure_time: DateTime<Utc>,
    status: ShipmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    estimated_delivery_time: DateTime<Utc>,
    current_eta: Option<DateTime<Utc>>,
}

impl Shipment {
    /// Register a shipment, computing its derived fields from the wall clock.
    pub fn create(new: NewShipment, engine: &EtaEngine) -> Result<Self> {
        Self::create_at(new, engine, Utc::now())
    }

    pub fn create_at(new: NewShipment, engine: &EtaEngine, now: DateTime<Utc>) -> Result<Self> {
        let current_location = new
            .current_location
            .unwrap_or_else(|| new.route.origin().to_string());
        ensure_on_route(&new.route, &current_location)?;

        let mut shipment = Self {
            shipment_id: new.shipment_id,
            container_id: new.container_id,
            route: new.route,
            current_location,
            departure_time: new.departure_time,
            status: new.status,
            image: new.image,
            estimated_delivery_time: new.departure_time,
            current_eta: None,
        };
        shipment.refresh_at(engine, now)?;
        Ok(shipment)
    }

    pub fn shipment_id(&self) -> &str {
        &self.shipment_id
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    pub fn departure_time(&self) -> DateTime<Utc> {
        self.departure_time
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Static delivery estimate from the departure time over the full route.
    pub fn estimated_delivery_time(&self) -> DateTime<Utc> {
        self.estimated_delivery_time
    }

    /// Live ETA from the last update; `None` once the final port is reached.
    pub fn current_eta(&self) -> Option<DateTime<Utc>> {
        self.current_eta
    }

    /// Move the shipment forward to `location`.
    pub fn update_location(&mut self, location: &str, engine: &EtaEngine) -> Result<()> {
        self.update_location_at(location, engine, Utc::now())
    }

    pub fn update_location_at(
        &mut self,
        location: &str,
        engine: &EtaEngine,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let requested = ensure_on_route(&self.route, location)?;
        if let Some(current) = self.route.position(&self.current_location) {
            if requested < current {
                return Err(Error::LocationRegressed {
                    current: self.current_location.clone(),
                    requested: location.to_string(),
                });
            }
        }

        debug!(
            shipment = %self.shipment_id,
            from = %self.current_location,
            to = location,
            "updating shipment location"
        );
        self.current_location = location.to_string();
        self.refresh_at(engine, now)
    }

    /// Replace the route. The current location must remain on the new route.
    pub fn update_route(&mut self, route: Route, engine: &EtaEngine) -> Result<()> {
        self.update_route_at(route, engine, Utc::now())
    }

    pub fn update_route_at(
        &mut self,
        route: Route,
        engine: &EtaEngine,
        now: DateTime<Utc>,
    ) -> Result<()> {
        ensure_on_route(&route, &self.current_location)?;
        debug!(shipment = %self.shipment_id, route = %route, "updating shipment route");
        self.route = route;
        self.refresh_at(engine, now)
    }

    /// Apply a status change permitted by the shipment lifecycle.
    pub fn set_status(&mut self, next: ShipmentStatus) -> Result<()> {
        if self.status == next {
            return Ok(());
        }
        if !self.status.can_transition_to(next) {
            return Err(Error::InvalidStatusTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        if next == ShipmentStatus::Delivered && self.current_location != self.route.destination() {
            warn!(
                shipment = %self.shipment_id,
                location = %self.current_location,
                "marking shipment delivered before it reached its destination"
            );
        }
        self.status = next;
        Ok(())
    }

    /// Full progress report for the shipment's current position.
    pub fn progress(&self, engine: &EtaEngine) -> Result<RouteProgress> {
        engine.compute_progress(&self.route, &self.current_location, self.departure_time)
    }

    pub fn progress_at(&self, engine: &EtaEngine, now: DateTime<Utc>) -> Result<RouteProgress> {
        engine.compute_progress_at(&self.route, &self.current_location, self.departure_time, now)
    }

    fn refresh_at(&mut self, engine: &EtaEngine, now: DateTime<Utc>) -> Result<()> {
        let progress = self.progress_at(engine, now)?;
        self.estimated_delivery_time = progress.total_eta;
        self.current_eta = progress.remaining_eta;
        Ok(())
    }
}

fn ensure_on_route(route: &Route, location: &str) -> Result<usize> {
    route
        .position(location)
        .ok_or_else(|| Error::LocationNotOnRoute {
            location: location.to_string(),
            suggestions: route.fuzzy_port_matches(location, 3),
        })
}
