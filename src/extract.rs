//! HTML extraction for BBC Weather forecast pages.
//!
//! The page layout is fixed, so the selectors are too: a location-name
//! heading and a day carousel whose list items each wrap an `a#daylink-<i>`
//! anchor holding the day title, description, and temperature. Extraction is
//! a pure function over the markup text and never fails; any anchor missing
//! from the document degrades to an empty string so that a partial page
//! change does not break the whole report.

use scraper::{ElementRef, Html, Selector};

use crate::models::{CityReport, DayCondition};

const LOCATION_NAME: &str = "#wr-location-name-id";
const DAY_ITEMS: &str = ".wr-day-carousel li";
const DAY_TITLE: &str = ".wr-day__title";
const DAY_DESCRIPTION: &str = ".wr-day__details__weather-type-description";
const DAY_TEMPERATURE: &str = ".wr-value--temperature--c";

/// The carousel can carry extra placeholder items; only the first week is kept
const MAX_FORECAST_DAYS: usize = 7;

/// Extract a [`CityReport`] from forecast page markup
#[must_use]
pub fn extract(markup: &str) -> CityReport {
    let document = Html::parse_document(markup);

    let day_selector = Selector::parse(DAY_ITEMS).unwrap();
    let week_list = document
        .select(&day_selector)
        .take(MAX_FORECAST_DAYS)
        .enumerate()
        .map(|(index, item)| extract_day(item, index))
        .collect();

    CityReport {
        city: extract_city_name(&document),
        week_list,
    }
}

/// The heading text reads like "Cairo - Weather"; only the leading segment
/// names the city
fn extract_city_name(document: &Html) -> String {
    let selector = Selector::parse(LOCATION_NAME).unwrap();
    document
        .select(&selector)
        .next()
        .map(|element| {
            let text = element_text(element);
            text.split(" - ").next().unwrap_or("").trim().to_string()
        })
        .unwrap_or_default()
}

fn extract_day(item: ElementRef<'_>, index: usize) -> DayCondition {
    // Anchors are position-qualified: the item at carousel position i wraps
    // a#daylink-i
    let anchor_selector = Selector::parse(&format!("a#daylink-{index}")).unwrap();
    let (day, short_forecast, temperature) = match item.select(&anchor_selector).next() {
        Some(anchor) => (
            select_text(anchor, DAY_TITLE),
            select_text(anchor, DAY_DESCRIPTION),
            select_text(anchor, DAY_TEMPERATURE),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    let (high_temp, low_temp) = decompose_temperature(&temperature, index);

    DayCondition {
        day,
        short_forecast,
        temperature,
        high_temp,
        low_temp,
    }
}

fn select_text(scope: ElementRef<'_>, selector: &str) -> String {
    let selector = Selector::parse(selector).unwrap();
    scope
        .select(&selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Split a scraped temperature token into high and low readings.
///
/// The token concatenates up to two readings ("18°11°"). The first reading is
/// always the first three characters; tokens shorter than that are taken
/// whole. The entry at index 0 is today's forecast, which carries a single
/// reading duplicated into both fields.
fn decompose_temperature(token: &str, index: usize) -> (String, String) {
    if token.is_empty() {
        return (String::new(), String::new());
    }

    // Character split, not byte split: the degree sign is multi-byte
    let split = token
        .char_indices()
        .nth(3)
        .map_or(token.len(), |(offset, _)| offset);
    let high = token[..split].to_string();
    let rest = &token[split..];

    let low = if index == 0 || rest.is_empty() {
        high.clone()
    } else {
        rest.to_string()
    };

    (high, low)
}
