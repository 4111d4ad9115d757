use anyhow::Result;
use futures::future::join_all;
use tracing::error;
use tracing_subscriber::EnvFilter;

use skycast::{City, Fetcher, report_weather};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Positional arguments name catalog cities; no arguments means all of them
    let args: Vec<String> = std::env::args().skip(1).collect();
    let city_ids: Vec<String> = if args.is_empty() {
        City::ALL.iter().map(|city| city.id().to_string()).collect()
    } else {
        args
    };

    let fetcher = Fetcher::new()?;
    let results = join_all(city_ids.iter().map(|id| report_weather(&fetcher, id))).await;

    let mut failures = 0;
    for (city_id, result) in city_ids.iter().zip(results) {
        match result {
            Ok(line) => println!("{line}"),
            Err(e) => {
                failures += 1;
                error!(city = %city_id, kind = e.kind(), error = %e, "skipping city");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} cities failed", city_ids.len());
    }
    Ok(())
}
