use thiserror::Error;

/// Convenient result alias for the seatrack library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a route does not satisfy the minimum shape (two or more
    /// distinct, non-blank ports).
    #[error("invalid route: {reason}")]
    InvalidRoute { reason: String },

    /// Raised when a shipment is moved to a port that is not part of its route.
    #[error("location {location} is not on the route{}", format_suggestions(.suggestions))]
    LocationNotOnRoute {
        location: String,
        suggestions: Vec<String>,
    },

    /// Raised when a location update would move a shipment backwards along its route.
    #[error("location {requested} is behind the current location {current}")]
    LocationRegressed { current: String, requested: String },

    /// Raised when a shipment status change is not permitted by the lifecycle.
    #[error("cannot change shipment status from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Raised when a distance table entry is not a finite, positive number.
    #[error("invalid distance for {key}: {value}")]
    InvalidDistance { key: String, value: f64 },

    /// Raised when a distance table file cannot be interpreted.
    #[error("invalid distance table: {message}")]
    DistanceTableFormat { message: String },

    /// Raised when ETA inputs are outside the domain of the estimator.
    #[error("cannot estimate arrival: {message}")]
    InvalidEstimate { message: String },

    /// Raised when an ETA lands outside the representable timestamp range.
    #[error("estimated arrival is out of range")]
    TimestampOverflow,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
