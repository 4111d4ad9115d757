//! Error types and handling for the `skycast` library

use thiserror::Error;

/// Main error type for the `skycast` library
#[derive(Error, Debug)]
pub enum WeatherError {
    /// City identifier outside the fixed catalog
    #[error("Unknown city identifier: {city}")]
    Lookup { city: String },

    /// Transport-level failure (DNS, connection refused, non-success status)
    #[error("Network error: {message}")]
    Network { message: String },

    /// Unexpected structural failure during extraction. Missing page
    /// elements are tolerated and never produce this error.
    #[error("Parsing error: {message}")]
    Parsing { message: String },
}

impl WeatherError {
    /// Create a new lookup error
    pub fn lookup<S: Into<String>>(city: S) -> Self {
        Self::Lookup { city: city.into() }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new parsing error
    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing {
            message: message.into(),
        }
    }

    /// Short label distinguishing the error kind, used in log fields
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::Lookup { .. } => "lookup",
            WeatherError::Network { .. } => "network",
            WeatherError::Parsing { .. } => "parsing",
        }
    }
}
