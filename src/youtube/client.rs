//! YouTube HTTP client
//!
//! Discovers caption tracks by downloading the watch page and reading the
//! `ytInitialPlayerResponse` object embedded in it, then downloads the
//! timed-text documents the tracks point at.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use serde::Deserialize;
use url::Url;

use super::{CaptionTrack, DocumentFetcher, TrackLister, VideoId};
use crate::config::{FetchConfig, YoutubeConfig};
use crate::error::{Result, SubtitleError};

const PLAYER_RESPONSE_MARKER: &str = "ytInitialPlayerResponse";

/// YouTube client implementing both track listing and document download
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: reqwest::Client,
    watch_url_base: String,
}

impl YoutubeClient {
    /// Create a new client from configuration
    pub fn new(fetch: &FetchConfig, youtube: &YoutubeConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let accept_language = HeaderValue::from_str(&fetch.accept_language)
            .map_err(|e| SubtitleError::Config(format!("invalid accept_language: {}", e)))?;
        headers.insert(ACCEPT_LANGUAGE, accept_language);

        let http = reqwest::Client::builder()
            .user_agent(fetch.user_agent.as_str())
            .default_headers(headers)
            .timeout(fetch.timeout())
            .build()?;

        Ok(Self {
            http,
            watch_url_base: youtube.watch_url_base.clone(),
        })
    }

    /// Build the watch page URL for a video
    pub fn watch_url(&self, video: &VideoId) -> String {
        format!("{}?v={}", self.watch_url_base, video)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl TrackLister for YoutubeClient {
    async fn list_tracks(&self, video: &VideoId) -> Result<Vec<CaptionTrack>> {
        let url = self.watch_url(video);
        tracing::debug!("Fetching watch page {}", url);

        let html = self.get_text(&url).await?;
        let player = extract_player_response(&html).ok_or_else(|| {
            SubtitleError::VideoNotFound(format!("{}: no player response in watch page", video))
        })??;

        caption_tracks(player, video, &url)
    }
}

#[async_trait]
impl DocumentFetcher for YoutubeClient {
    async fn fetch_document(&self, locator: &str) -> Result<String> {
        tracing::debug!("Fetching timed-text document {}", locator);
        self.get_text(locator).await
    }
}

/// Subset of the player response that carries the caption track list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    playability_status: Option<PlayabilityStatus>,
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
struct PlayabilityStatus {
    status: String,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    tracklist: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<RawCaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCaptionTrack {
    base_url: String,
    #[serde(default)]
    language_code: String,
    name: Option<TrackName>,
    #[serde(default)]
    is_translatable: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackName {
    simple_text: Option<String>,
    #[serde(default)]
    runs: Vec<TextRun>,
}

#[derive(Debug, Deserialize)]
struct TextRun {
    text: String,
}

impl TrackName {
    fn label(&self) -> Option<String> {
        match &self.simple_text {
            Some(text) => Some(text.clone()),
            None if !self.runs.is_empty() => {
                Some(self.runs.iter().map(|r| r.text.as_str()).collect())
            }
            None => None,
        }
    }
}

/// Locate and decode the player response object embedded in a watch page.
///
/// Returns `None` when the page carries no player response at all.
pub fn extract_player_response(html: &str) -> Option<Result<PlayerResponse>> {
    let rest = html
        .match_indices(PLAYER_RESPONSE_MARKER)
        .find_map(|(start, marker)| {
            let rest = html[start + marker.len()..]
                .trim_start()
                .strip_prefix('=')?
                .trim_start();
            rest.starts_with('{').then_some(rest)
        })?;

    // The object is followed by more script, so only the first value is read.
    let value = serde_json::Deserializer::from_str(rest)
        .into_iter::<PlayerResponse>()
        .next()?;
    Some(value.map_err(SubtitleError::from))
}

/// Turn a decoded player response into the caption track list
pub fn caption_tracks(
    player: PlayerResponse,
    video: &VideoId,
    page_url: &str,
) -> Result<Vec<CaptionTrack>> {
    if let Some(status) = &player.playability_status {
        if status.status == "ERROR" {
            return Err(SubtitleError::VideoNotFound(format!(
                "{}: {}",
                video,
                status.reason.as_deref().unwrap_or("video unavailable")
            )));
        }
    }

    let raw_tracks = player
        .captions
        .and_then(|c| c.tracklist)
        .map(|t| t.caption_tracks)
        .unwrap_or_default();
    if raw_tracks.is_empty() {
        return Err(SubtitleError::NoTracks(video.to_string()));
    }

    let base = Url::parse(page_url)
        .map_err(|e| SubtitleError::Config(format!("invalid watch url {}: {}", page_url, e)))?;

    raw_tracks
        .into_iter()
        .map(|raw| {
            let fetch_locator = base
                .join(&raw.base_url)
                .map_err(|e| {
                    SubtitleError::Fetch(format!("invalid caption url {}: {}", raw.base_url, e))
                })?
                .to_string();
            let language_label = raw
                .name
                .as_ref()
                .and_then(TrackName::label)
                .unwrap_or_else(|| raw.language_code.clone());

            Ok(CaptionTrack {
                language_label,
                language_code: raw.language_code,
                is_translatable: raw.is_translatable,
                fetch_locator,
            })
        })
        .collect()
}
