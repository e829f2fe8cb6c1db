// Test-only helpers for `seatrack-lib` tests
#![allow(dead_code)]
use chrono::{DateTime, TimeZone, Utc};

use crate::eta::{hours_to_days, travel_hours, whole_hours, AVERAGE_SPEED_KNOTS};
use crate::progress::{RouteProgress, SegmentProgress};

/// Fixed reference instant used as "now" across unit tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 20, 8, 0, 0).unwrap()
}

/// Builder to create `RouteProgress` instances in tests with sensible defaults.
pub struct RouteProgressBuilder {
    progress: RouteProgress,
}

impl RouteProgressBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            progress: RouteProgress {
                current_location: "Singapore".to_string(),
                current_index: Some(1),
                total_distance: 3000.0,
                total_hours: 167.0,
                total_days: 6.9,
                total_eta: fixed_now(),
                remaining_distance: 1200.0,
                remaining_hours: 67.0,
                remaining_days: 2.8,
                remaining_eta: Some(fixed_now()),
                completed_segments: 1,
                percent_complete: 50.0,
                segments: vec![
                    SegmentBuilder::new("Mumbai", "Singapore", 1800.0)
                        .completed(true)
                        .build(),
                    SegmentBuilder::new("Singapore", "Colombo", 1200.0)
                        .index(1)
                        .build(),
                ],
            },
        }
    }

    pub fn location(mut self, name: &str) -> Self {
        self.progress.current_location = name.to_string();
        self
    }

    pub fn remaining_eta(mut self, eta: Option<DateTime<Utc>>) -> Self {
        self.progress.remaining_eta = eta;
        self
    }

    pub fn completed(mut self, completed: usize) -> Self {
        self.progress.completed_segments = completed;
        self
    }

    pub fn percent(mut self, percent: f64) -> Self {
        self.progress.percent_complete = percent;
        self
    }

    pub fn build(self) -> RouteProgress {
        self.progress
    }
}

impl Default for RouteProgressBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for individual `SegmentProgress` rows.
pub struct SegmentBuilder {
    segment: SegmentProgress,
}

impl SegmentBuilder {
    #[must_use]
    pub fn new(from: &str, to: &str, distance: f64) -> Self {
        let hours = travel_hours(distance, AVERAGE_SPEED_KNOTS);
        Self {
            segment: SegmentProgress {
                index: 0,
                from: from.to_string(),
                to: to.to_string(),
                distance,
                hours: whole_hours(hours),
                days: hours_to_days(hours),
                completed: false,
            },
        }
    }

    pub fn index(mut self, index: usize) -> Self {
        self.segment.index = index;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.segment.completed = completed;
        self
    }

    pub fn build(self) -> SegmentProgress {
        self.segment
    }
}
