//! Fetch-then-extract pipeline for one city.

use tracing::{error, info};

use crate::Result;
use crate::extract::extract;
use crate::fetch::Fetcher;
use crate::models::CityReport;

/// Build the full structured report for one city
pub async fn city_report(fetcher: &Fetcher, city_id: &str) -> Result<CityReport> {
    let markup = fetcher.fetch(city_id).await.map_err(|e| {
        error!(city = city_id, kind = e.kind(), error = %e, "weather fetch failed");
        e
    })?;

    let report = extract(&markup);
    info!(
        city = %report.city,
        days = report.week_list.len(),
        "extracted city report"
    );

    Ok(report)
}

/// Fetch, extract, and render a one-line summary for one city
pub async fn report_weather(fetcher: &Fetcher, city_id: &str) -> Result<String> {
    let report = city_report(fetcher, city_id).await?;
    Ok(report.summary())
}
