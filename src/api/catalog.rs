//! In-memory episode catalog with a revalidation window.
//! A fresh snapshot is served from memory; a stale one triggers a refetch and
//! is kept as a fallback if that refetch fails.

use crate::api::client::EpisodeClient;
use crate::api::error::Result;
use crate::api::models::Episode;
use crate::config::AppConfig;
use crate::diagnostics::log_perf;
use chrono::{DateTime, Utc};
use dioxus::logger::tracing::{info, warn};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use std::time::Duration;

static CATALOG: Lazy<Mutex<Option<EpisodeCatalog>>> = Lazy::new(|| Mutex::new(None));

#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeCatalog {
    pub latest: Vec<Episode>,
    pub all: Vec<Episode>,
    pub fetched_at: DateTime<Utc>,
}

impl EpisodeCatalog {
    /// Split newest-first episodes into the highlighted head and the table rest.
    pub fn from_episodes(mut episodes: Vec<Episode>, latest_count: usize, fetched_at: DateTime<Utc>) -> Self {
        let split_at = latest_count.min(episodes.len());
        let all = episodes.split_off(split_at);
        Self {
            latest: episodes,
            all,
            fetched_at,
        }
    }

    /// Playlist handed to the player: latest first, then the table rows.
    pub fn playlist(&self) -> Vec<Episode> {
        self.latest.iter().chain(self.all.iter()).cloned().collect()
    }

    /// Playlist index of a table row.
    pub fn table_play_index(&self, row: usize) -> usize {
        row + self.latest.len()
    }

    pub fn is_stale(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match (now - self.fetched_at).to_std() {
            Ok(age) => age >= window,
            // fetched_at in the future: clock moved backwards, refetch
            Err(_) => true,
        }
    }
}

fn cached_snapshot() -> Option<EpisodeCatalog> {
    CATALOG.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

fn store_snapshot(catalog: &EpisodeCatalog) {
    *CATALOG.lock().unwrap_or_else(|e| e.into_inner()) = Some(catalog.clone());
}

/// Return the catalog, refetching once the cached snapshot has gone stale.
pub async fn load_catalog(config: &AppConfig) -> Result<EpisodeCatalog> {
    let now = Utc::now();
    let cached = cached_snapshot();
    if let Some(snapshot) = cached.as_ref() {
        if !snapshot.is_stale(now, config.revalidate_after()) {
            return Ok(snapshot.clone());
        }
        info!("Episode catalog is stale, revalidating");
    }

    let client = EpisodeClient::from_config(config);
    match client.list_latest(config.episode_limit).await {
        Ok(episodes) => {
            let fetched_at = Utc::now();
            log_perf(
                "load_catalog",
                (fetched_at - now).to_std().unwrap_or_default(),
                &format!("{} episodes", episodes.len()),
            );
            let catalog = EpisodeCatalog::from_episodes(episodes, config.latest_count, fetched_at);
            store_snapshot(&catalog);
            Ok(catalog)
        }
        Err(err) => match cached {
            Some(snapshot) => {
                warn!("Revalidation failed, serving previous catalog: {err}");
                Ok(snapshot)
            }
            None => {
                warn!("Failed to load episode catalog: {err}");
                Err(err)
            }
        },
    }
}

/// Look an episode up in the cached catalog before asking the API.
pub async fn load_episode(config: &AppConfig, id: &str) -> Result<Episode> {
    if let Some(found) = cached_snapshot().and_then(|catalog| {
        catalog
            .latest
            .into_iter()
            .chain(catalog.all)
            .find(|episode| episode.id == id)
    }) {
        return Ok(found);
    }
    EpisodeClient::from_config(config).get_episode(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn episodes(count: usize) -> Vec<Episode> {
        (0..count)
            .map(|i| Episode {
                id: format!("ep-{i}"),
                title: format!("Episode {i}"),
                ..Episode::default()
            })
            .collect()
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, 22, hour, 0, 0).unwrap()
    }

    #[test]
    fn splits_latest_from_table() {
        let catalog = EpisodeCatalog::from_episodes(episodes(12), 2, at(0));
        assert_eq!(catalog.latest.len(), 2);
        assert_eq!(catalog.all.len(), 10);
        assert_eq!(catalog.all[0].id, "ep-2");
    }

    #[test]
    fn table_rows_map_into_the_combined_playlist() {
        let catalog = EpisodeCatalog::from_episodes(episodes(12), 2, at(0));
        let playlist = catalog.playlist();
        assert_eq!(playlist.len(), 12);
        for row in 0..catalog.all.len() {
            assert_eq!(playlist[catalog.table_play_index(row)], catalog.all[row]);
        }
    }

    #[test]
    fn short_catalog_has_empty_table() {
        let catalog = EpisodeCatalog::from_episodes(episodes(1), 2, at(0));
        assert_eq!(catalog.latest.len(), 1);
        assert!(catalog.all.is_empty());
    }

    #[test]
    fn goes_stale_after_window() {
        let catalog = EpisodeCatalog::from_episodes(episodes(3), 2, at(0));
        let window = Duration::from_secs(8 * 60 * 60);
        assert!(!catalog.is_stale(at(7), window));
        assert!(catalog.is_stale(at(8), window));
        assert!(catalog.is_stale(at(0) - chrono::Duration::hours(1), window));
    }
}
