use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceTable;
use crate::error::{Error, Result};

/// Ordered sequence of ports a shipment traverses.
///
/// A `Route` always holds at least two distinct, non-blank port names. Order
/// is traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Route {
    ports: Vec<String>,
}

impl Route {
    /// Validate and build a route from port names.
    pub fn new<I, S>(ports: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ports: Vec<String> = ports.into_iter().map(Into::into).collect();

        if ports.len() < 2 {
            return Err(Error::InvalidRoute {
                reason: format!("expected at least 2 ports, got {}", ports.len()),
            });
        }

        let mut seen = HashSet::with_capacity(ports.len());
        for port in &ports {
            if port.trim().is_empty() {
                return Err(Error::InvalidRoute {
                    reason: "port names must not be blank".to_string(),
                });
            }
            if !seen.insert(port.as_str()) {
                return Err(Error::InvalidRoute {
                    reason: format!("port {port} appears more than once"),
                });
            }
        }

        Ok(Self { ports })
    }

    /// Parse a comma-separated list such as `"Mumbai, Singapore, Colombo"`.
    pub fn parse_list(list: &str) -> Result<Self> {
        Self::new(list.split(',').map(str::trim))
    }

    pub fn ports(&self) -> &[String] {
        &self.ports
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Number of legs between consecutive ports.
    pub fn segment_count(&self) -> usize {
        self.ports.len() - 1
    }

    pub fn origin(&self) -> &str {
        &self.ports[0]
    }

    pub fn destination(&self) -> &str {
        &self.ports[self.ports.len() - 1]
    }

    /// Index of `port` in traversal order.
    pub fn position(&self, port: &str) -> Option<usize> {
        self.ports.iter().position(|p| p == port)
    }

    pub fn contains(&self, port: &str) -> bool {
        self.position(port).is_some()
    }

    /// Consecutive `(from, to)` port pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.ports
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Ports on the route that resemble `name`, best match first.
    pub fn fuzzy_port_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .ports
            .iter()
            .map(|port| (strsim::jaro_winkler(&needle, &port.to_lowercase()), port))
            .filter(|(score, _)| *score >= 0.8)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, port)| port.clone())
            .collect()
    }
}

impl TryFrom<Vec<String>> for Route {
    type Error = Error;

    fn try_from(ports: Vec<String>) -> Result<Self> {
        Self::new(ports)
    }
}

impl From<Route> for Vec<String> {
    fn from(route: Route) -> Self {
        route.ports
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ports.join(" -> "))
    }
}

/// Sum of table distances over consecutive pairs of `ports`.
///
/// Slices with fewer than two ports have no legs and sum to zero; full routes
/// are validated by [`Route::new`] before they get here.
pub fn total_distance<S: AsRef<str>>(table: &DistanceTable, ports: &[S]) -> f64 {
    ports
        .windows(2)
        .map(|pair| table.lookup(pair[0].as_ref(), pair[1].as_ref()))
        .sum()
}
