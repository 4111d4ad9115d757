//! HTTP fetch of BBC Weather forecast pages.
//!
//! One GET per call, no retries. The transport sits behind a trait so tests
//! can substitute a counting mock and assert that catalog lookups fail before
//! any request goes out.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::Result;
use crate::cities::City;
use crate::error::WeatherError;

/// Forecast pages live at `BASE_URL<location-code>`
pub const BASE_URL: &str = "https://www.bbc.com/weather/";

const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal GET transport: fetch a URL, return the body text on success
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}

/// Production transport backed by a shared reqwest client
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WeatherError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::network(format!(
                "{url} returned status {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| WeatherError::network(format!("failed to read body from {url}: {e}")))
    }
}

/// Downloads raw forecast page markup for catalog cities
pub struct Fetcher {
    transport: Arc<dyn Transport>,
}

impl Fetcher {
    /// Create a fetcher backed by the production HTTP transport
    pub fn new() -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new()?),
        })
    }

    /// Create a fetcher over a caller-supplied transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Resolve a city identifier and download its forecast page markup.
    ///
    /// Unknown identifiers fail with a lookup error before any request is
    /// issued.
    pub async fn fetch(&self, city_id: &str) -> Result<String> {
        let city = City::from_id(city_id)?;
        let url = format!("{BASE_URL}{}", city.location_code());

        debug!(%url, "requesting forecast page");
        let markup = self.transport.get(&url).await?;
        info!(city = city.id(), bytes = markup.len(), "fetched forecast page");

        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts requests; answers with a canned body or a network failure
    struct MockTransport {
        calls: AtomicUsize,
        body: Option<String>,
    }

    impl MockTransport {
        fn returning(body: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                body: Some(body.to_string()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                body: None,
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn get(&self, _url: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.body {
                Some(body) => Ok(body.clone()),
                None => Err(WeatherError::network("connection refused")),
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_city_fails_before_any_request() {
        let mock = MockTransport::returning("<html></html>");
        let fetcher = Fetcher::with_transport(mock.clone());

        let err = fetcher.fetch("atlantis").await.unwrap_err();
        assert!(matches!(err, WeatherError::Lookup { .. }));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_returns_body_for_known_city() {
        let mock = MockTransport::returning("<html>forecast</html>");
        let fetcher = Fetcher::with_transport(mock.clone());

        let markup = fetcher.fetch("cairo").await.unwrap();
        assert_eq!(markup, "<html>forecast</html>");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_network_error() {
        let mock = MockTransport::failing();
        let fetcher = Fetcher::with_transport(mock.clone());

        let err = fetcher.fetch("london").await.unwrap_err();
        assert!(matches!(err, WeatherError::Network { .. }));
        assert_eq!(mock.call_count(), 1);
    }
}
