use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::progress::RouteProgress;

/// Presentation style for turning a [`RouteProgress`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressRenderMode {
    /// Multi-line report with totals, remaining figures and every leg.
    PlainText,
    /// Single status line.
    Compact,
}

impl RouteProgress {
    /// Render the report using the requested textual mode.
    pub fn render(&self, mode: ProgressRenderMode) -> String {
        match mode {
            ProgressRenderMode::PlainText => self.render_plain(),
            ProgressRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Total distance: {} nm ({} h, {} d)",
            format_with_separators(self.total_distance),
            self.total_hours,
            self.total_days
        );
        let _ = writeln!(buffer, "Scheduled arrival: {}", format_timestamp(self.total_eta));
        let _ = writeln!(
            buffer,
            "Current location: {} ({}% complete)",
            self.current_location,
            self.percent_complete.round()
        );
        let _ = writeln!(
            buffer,
            "Remaining: {} nm ({} h, {} d)",
            format_with_separators(self.remaining_distance),
            self.remaining_hours,
            self.remaining_days
        );
        match self.remaining_eta {
            Some(eta) => {
                let _ = writeln!(buffer, "ETA: {}", format_timestamp(eta));
            }
            None => {
                let _ = writeln!(buffer, "ETA: arrived");
            }
        }
        let _ = writeln!(buffer, "Segments:");
        for seg in &self.segments {
            let marker = if seg.completed { "x" } else { " " };
            let _ = writeln!(
                buffer,
                " [{}] {} -> {}: {} nm ({} d)",
                marker,
                seg.from,
                seg.to,
                format_with_separators(seg.distance),
                seg.days
            );
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let eta = self
            .remaining_eta
            .map(format_timestamp)
            .unwrap_or_else(|| "arrived".to_string());
        format!(
            "{} {}/{} legs ({}%), {} nm remaining, ETA {}\n",
            self.current_location,
            self.completed_segments,
            self.segment_count(),
            self.percent_complete.round(),
            format_with_separators(self.remaining_distance),
            eta
        )
    }
}

/// Human label for how long is left until `eta`.
///
/// `None` renders as `Calculating...`, an ETA at or before `now` as `Arrived`,
/// otherwise whole days and hours remaining (floored).
pub fn format_time_remaining(eta: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(eta) = eta else {
        return "Calculating...".to_string();
    };
    let diff = eta - now;
    if diff.num_milliseconds() <= 0 {
        return "Arrived".to_string();
    }
    let days = diff.num_days();
    let hours = diff.num_hours() - days * 24;
    format!("{days}d {hours}h remaining")
}

/// RFC 3339 timestamp with second precision and a `Z` suffix.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Round `nm` to a whole number and group thousands with commas.
pub fn format_with_separators(nm: f64) -> String {
    let value = nm.round() as i64;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
