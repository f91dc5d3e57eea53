use crate::api::error::{ApiError, Result};
use crate::utils::format_time_to_string;
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime};
use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

/// Episode record exactly as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEpisode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(alias = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub description: String,
    pub file: RawEpisodeFile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEpisodeFile {
    pub url: String,
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub duration: DurationValue,
}

/// The API sends durations either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(f64),
    Text(String),
}

impl Default for DurationValue {
    fn default() -> Self {
        Self::Seconds(0.0)
    }
}

impl DurationValue {
    pub fn as_seconds(&self) -> u32 {
        let seconds = match self {
            Self::Seconds(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        };
        match seconds {
            Some(value) if value.is_finite() && value >= 0.0 => value.floor().min(u32::MAX as f64) as u32,
            _ => {
                warn!("Unreadable episode duration {self:?}, using 0");
                0
            }
        }
    }
}

/// Episode in the shape the views and the player consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    pub published_at: String,
    pub duration: u32,
    pub duration_as_string: String,
    pub description: String,
    pub url: String,
}

impl TryFrom<RawEpisode> for Episode {
    type Error = ApiError;

    fn try_from(raw: RawEpisode) -> Result<Self> {
        let published_at = format_published_at(&raw.published_at)?;
        let duration = raw.file.duration.as_seconds();
        Ok(Self {
            id: raw.id,
            title: raw.title,
            members: raw.members,
            thumbnail: raw.thumbnail,
            published_at,
            duration,
            duration_as_string: format_time_to_string(duration),
            description: raw.description,
            url: raw.file.url,
        })
    }
}

/// Shape a batch of raw records, keeping API order.
pub fn shape_episodes(raw: Vec<RawEpisode>) -> Result<Vec<Episode>> {
    raw.into_iter().map(Episode::try_from).collect()
}

fn parse_published_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_local().date());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(parsed.date());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|source| ApiError::PublishedAt {
        value: value.to_string(),
        source,
    })
}

/// Short pt-BR publication date, e.g. `8 jan 21`.
pub fn format_published_at(value: &str) -> Result<String> {
    let date = parse_published_date(value)?;
    Ok(date.format_localized("%-d %b %y", Locale::pt_BR).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_record(duration: serde_json::Value) -> RawEpisode {
        serde_json::from_value(json!({
            "id": "a-importancia-da-contribuicao-em-open-source",
            "title": "Faladev #30 | A importância da contribuição em Open Source",
            "members": "Diego Fernandes, João Pedro, Diego Haz e Bruno Lemos",
            "published_at": "2021-01-22 19:12:00",
            "thumbnail": "https://example.com/opensource.jpg",
            "description": "<p>Nesse episódio do Faladev...</p>",
            "file": {
                "url": "https://example.com/opensource.m4a",
                "type": "audio/x-m4a",
                "duration": duration
            }
        }))
        .unwrap()
    }

    #[test]
    fn shapes_string_duration() {
        let episode = Episode::try_from(raw_record(json!("3981"))).unwrap();
        assert_eq!(episode.duration, 3981);
        assert_eq!(episode.duration_as_string, "66:21");
        assert_eq!(episode.url, "https://example.com/opensource.m4a");
        assert_eq!(episode.published_at, "22 jan 21");
    }

    #[test]
    fn shapes_numeric_duration() {
        let episode = Episode::try_from(raw_record(json!(1754))).unwrap();
        assert_eq!(episode.duration, 1754);
        assert_eq!(episode.duration_as_string, "29:14");
    }

    #[test]
    fn unreadable_duration_falls_back_to_zero() {
        let episode = Episode::try_from(raw_record(json!("soon"))).unwrap();
        assert_eq!(episode.duration, 0);
        assert_eq!(episode.duration_as_string, "00:00");
    }

    #[test]
    fn accepts_rfc3339_dates() {
        assert_eq!(format_published_at("2021-02-03T10:00:00Z").unwrap(), "3 fev 21");
    }

    #[test]
    fn rejects_garbage_dates() {
        let err = format_published_at("yesterday").unwrap_err();
        assert!(matches!(err, ApiError::PublishedAt { .. }));
    }
}
