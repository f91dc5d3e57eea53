use crate::api::error::{ApiError, Result};
use crate::api::models::{shape_episodes, Episode, RawEpisode};
use crate::config::AppConfig;
use dioxus::logger::tracing::{info, warn};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Thin client for the episode listing API.
pub struct EpisodeClient {
    base_url: String,
}

impl EpisodeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String, query: &[(&str, String)]) -> Result<T> {
        let response = HTTP_CLIENT
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {url} returned {status}");
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    /// Newest episodes first, at most `limit` of them.
    pub async fn list_latest(&self, limit: u32) -> Result<Vec<Episode>> {
        let url = self.build_url("episodes");
        let query = [
            ("_limit", limit.to_string()),
            ("_sort", "published_at".to_string()),
            ("_order", "desc".to_string()),
        ];
        let raw: Vec<RawEpisode> = self.get_json(url, &query).await?;
        info!("Fetched {} episodes", raw.len());
        shape_episodes(raw)
    }

    pub async fn get_episode(&self, id: &str) -> Result<Episode> {
        let url = self.build_url(&format!("episodes/{id}"));
        let raw: RawEpisode = self.get_json(url, &[]).await?;
        Episode::try_from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slashes() {
        let client = EpisodeClient::new("http://localhost:3333/");
        assert_eq!(client.build_url("episodes"), "http://localhost:3333/episodes");
        assert_eq!(
            client.build_url("/episodes/abc"),
            "http://localhost:3333/episodes/abc"
        );
    }
}
