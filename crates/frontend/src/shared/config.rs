//! Client configuration.
//!
//! Search order:
//! 1. Built-in defaults
//! 2. JSON stored in localStorage under `admin_config` (whole or partial)
//! 3. URL query overrides, e.g. `?page_size=25&log_level=info`
//!
//! Later sources win field by field. Broken sources are logged and skipped.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

pub const STORAGE_KEY: &str = "admin_config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rows per page on list pages
    pub page_size: usize,
    /// Simulated latency of the mock data layer
    pub load_delay_ms: u32,
    /// One of error/warn/info/debug/trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            load_delay_ms: 800,
            log_level: "debug".to_string(),
        }
    }
}

/// Partial config: every field optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigOverrides {
    pub page_size: Option<usize>,
    pub load_delay_ms: Option<u32>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid config JSON: {}", e))
    }

    pub fn from_query(query: &str) -> Result<Self, String> {
        serde_qs::from_str(query.trim_start_matches('?'))
            .map_err(|e| format!("Invalid config query: {}", e))
    }
}

impl AppConfig {
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(size) = overrides.page_size.filter(|s| *s > 0) {
            self.page_size = size;
        }
        if let Some(delay) = overrides.load_delay_ms {
            self.load_delay_ms = delay;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    /// Parsed log level; unknown names fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

fn stored_overrides() -> Option<String> {
    window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
}

fn query_string() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Build the config from all sources. Runs before logging is set up, so
/// problems are returned rather than logged.
pub fn load_config() -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut problems = Vec::new();

    if let Some(json) = stored_overrides() {
        match ConfigOverrides::from_json(&json) {
            Ok(overrides) => config.apply(overrides),
            Err(e) => problems.push(e),
        }
    }

    let query = query_string();
    if !query.trim_start_matches('?').is_empty() {
        match ConfigOverrides::from_query(&query) {
            Ok(overrides) => config.apply(overrides),
            Err(e) => problems.push(e),
        }
    }

    (config, problems)
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

/// Config from context, or defaults outside the app tree.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
