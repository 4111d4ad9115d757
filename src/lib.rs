//! `skycast` - Seven-day city weather reports scraped from the BBC Weather site
//!
//! This library fetches the forecast page for a fixed set of cities and
//! extracts a structured weekly report from its markup.

pub mod cities;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod report;

// Re-export core types for public API
pub use cities::City;
pub use error::WeatherError;
pub use extract::extract;
pub use fetch::{Fetcher, HttpTransport, Transport};
pub use models::{CityReport, DayCondition};
pub use report::{city_report, report_weather};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
