//! Report data model: one city, up to seven daily conditions.
//!
//! Serialized field names follow the camelCase shape consumers of the report
//! expect (`weekList`, `shortForecast`, `highTemp`, `lowTemp`).

use serde::{Deserialize, Serialize};

/// One forecast day extracted from the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCondition {
    /// Display label for the day, empty when the markup anchor is absent
    pub day: String,
    /// Brief weather description
    pub short_forecast: String,
    /// Raw scraped temperature token, possibly two concatenated readings
    /// such as `"18°11°"`
    pub temperature: String,
    /// First reading sliced from the token
    pub high_temp: String,
    /// Second reading, or a duplicate of the first when only one exists
    pub low_temp: String,
}

/// Weekly forecast report for one city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityReport {
    pub city: String,
    /// At most seven entries, in page order
    pub week_list: Vec<DayCondition>,
}

impl CityReport {
    /// One-line human summary built from the first day's forecast
    #[must_use]
    pub fn summary(&self) -> String {
        match self.week_list.first() {
            Some(today) => format!(
                "{}: {}, high {}, low {}",
                self.city, today.short_forecast, today.high_temp, today.low_temp
            ),
            None => format!("{}: no forecast data", self.city),
        }
    }
}
