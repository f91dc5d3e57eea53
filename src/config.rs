//! Runtime configuration for the episode catalog.
//! Compile-time defaults can be overridden from localStorage on the web or from
//! the environment on native targets.

use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

pub const DEFAULT_API_URL: &str = match option_env!("PODCASTR_API_URL") {
    Some(url) => url,
    None => "http://localhost:3333",
};
pub const DEFAULT_EPISODE_LIMIT: u32 = 12;
pub const DEFAULT_LATEST_COUNT: usize = 2;
/// Eight hours between catalog refreshes.
pub const DEFAULT_REVALIDATE_SECS: u64 = 60 * 60 * 8;

#[cfg(target_arch = "wasm32")]
const API_URL_KEY: &str = "podcastr.api_url";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub episode_limit: u32,
    pub latest_count: usize,
    pub revalidate_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            episode_limit: DEFAULT_EPISODE_LIMIT,
            latest_count: DEFAULT_LATEST_COUNT,
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
        }
    }
}

impl AppConfig {
    pub fn revalidate_after(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }

    /// Build the config from defaults plus any platform override.
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply_overrides();
        config.api_base_url = normalize_base_url(&config.api_base_url);
        config
    }

    #[cfg(target_arch = "wasm32")]
    fn apply_overrides(&mut self) {
        match LocalStorage::get::<String>(API_URL_KEY) {
            Ok(url) if !url.trim().is_empty() => self.api_base_url = url,
            Ok(_) => {}
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => {}
            Err(e) => warn!("Ignoring stored API url override: {e}"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply_overrides(&mut self) {
        if let Ok(url) = std::env::var("PODCASTR_API_URL") {
            if !url.trim().is_empty() {
                self.api_base_url = url;
            }
        }
        if let Some(limit) = env_number::<u32>("PODCASTR_EPISODE_LIMIT") {
            self.episode_limit = limit.max(1);
        }
        if let Some(secs) = env_number::<u64>("PODCASTR_REVALIDATE_SECS") {
            self.revalidate_secs = secs;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {key}={raw:?}: not a number");
            None
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_catalog_query() {
        let config = AppConfig::default();
        assert_eq!(config.episode_limit, 12);
        assert_eq!(config.latest_count, 2);
        assert_eq!(config.revalidate_after(), Duration::from_secs(28_800));
    }

    #[test]
    fn strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://api.example.com/ "),
            "https://api.example.com"
        );
    }
}
