//! Mock data layer.
//!
//! Records come from JSON fixtures compiled into the bundle. A fetch waits
//! `load_delay_ms` before answering to mimic a network round trip, then hands
//! out a fresh copy so pages can mutate their list freely.

use gloo_timers::future::TimeoutFuture;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

/// Parsed fixture, cached for the lifetime of the page.
pub type Fixture<T> = Lazy<Result<Vec<T>, String>>;

/// Parse a JSON array of records.
pub fn parse_fixture<T: DeserializeOwned>(json: &str, what: &str) -> Result<Vec<T>, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse {}: {}", what, e))
}

/// Wait `delay_ms`, then return a copy of the fixture.
pub async fn fetch_fixture<T: Clone>(
    fixture: &'static Fixture<T>,
    what: &str,
    delay_ms: u32,
) -> Result<Vec<T>, String> {
    if delay_ms > 0 {
        TimeoutFuture::new(delay_ms).await;
    }
    match Lazy::force(fixture) {
        Ok(items) => {
            log::info!("loaded {} {}", items.len(), what);
            Ok(items.clone())
        }
        Err(e) => {
            log::error!("{}", e);
            Err(e.clone())
        }
    }
}
