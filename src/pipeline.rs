//! Per-request caption pipeline
//!
//! For every caption track of a video: download the timed-text document,
//! parse it into cues, render SRT and plain text, and sort the result into
//! the original or translatable bucket. A failing track is logged and left
//! out; it never aborts its siblings.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::config::FetchConfig;
use crate::error::{Result, SubtitleError};
use crate::subtitle::{self, render_srt, render_txt, Cue};
use crate::youtube::{CaptionTrack, DocumentFetcher, TrackLister, VideoId};

/// Rendered output formats of one track
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubtitleFormats {
    pub srt: String,
    pub txt: String,
}

/// A successfully rendered caption track
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubtitleTrack {
    #[serde(rename = "lang")]
    pub language_label: String,
    #[serde(skip)]
    pub is_translatable: bool,
    pub formats: SubtitleFormats,
}

impl SubtitleTrack {
    /// Render both output formats for a track
    pub fn render(track: &CaptionTrack, cues: &[Cue]) -> Self {
        Self {
            language_label: track.language_label.clone(),
            is_translatable: track.is_translatable,
            formats: SubtitleFormats {
                srt: render_srt(cues),
                txt: render_txt(cues),
            },
        }
    }
}

/// Response payload: rendered tracks split by translatability
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubtitlesResult {
    pub originals: Vec<SubtitleTrack>,
    pub translations: Vec<SubtitleTrack>,
}

impl SubtitlesResult {
    /// Append a track to the bucket it belongs in
    pub fn push(&mut self, track: SubtitleTrack) {
        if track.is_translatable {
            self.translations.push(track);
        } else {
            self.originals.push(track);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty() && self.translations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.originals.len() + self.translations.len()
    }
}

/// Outcome of processing a single caption track
#[derive(Debug)]
pub enum TrackOutcome {
    Rendered(SubtitleTrack),
    Failed {
        language_label: String,
        error: SubtitleError,
    },
}

/// Pipeline tuning knobs
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Upper bound for one document download
    pub fetch_timeout: Duration,
    /// Extra download attempts after a failure
    pub retries: u32,
    /// Tracks processed at the same time
    pub max_concurrent_tracks: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from(&FetchConfig::default())
    }
}

impl From<&FetchConfig> for PipelineOptions {
    fn from(fetch: &FetchConfig) -> Self {
        Self {
            fetch_timeout: fetch.timeout(),
            retries: fetch.retries,
            max_concurrent_tracks: fetch.max_concurrent_tracks.max(1),
        }
    }
}

/// Collect and render all caption tracks of a video.
///
/// Fails with `NoTracks` when the video has no tracks (nothing is fetched
/// in that case) and with `NoUsableSubtitles` when every track failed.
pub async fn collect_subtitles(
    lister: &dyn TrackLister,
    fetcher: &dyn DocumentFetcher,
    video: &VideoId,
    options: &PipelineOptions,
) -> Result<SubtitlesResult> {
    let tracks = lister.list_tracks(video).await?;
    if tracks.is_empty() {
        return Err(SubtitleError::NoTracks(video.to_string()));
    }
    tracing::info!("Found {} caption track(s) for {}", tracks.len(), video);

    // `buffered` yields in input order, so discovery order survives the fan-out.
    let outcomes: Vec<TrackOutcome> = stream::iter(tracks.iter().cloned())
        .map(|track| async move { process_track(fetcher, &track, options).await })
        .buffered(options.max_concurrent_tracks.max(1))
        .collect()
        .await;

    let mut result = SubtitlesResult::default();
    for outcome in outcomes {
        match outcome {
            TrackOutcome::Rendered(track) => result.push(track),
            TrackOutcome::Failed {
                language_label,
                error,
            } => {
                if error.is_track_local() {
                    tracing::warn!("Skipping track '{}' of {}: {}", language_label, video, error);
                } else {
                    tracing::error!("Skipping track '{}' of {}: {}", language_label, video, error);
                }
            }
        }
    }

    if result.is_empty() {
        return Err(SubtitleError::NoUsableSubtitles);
    }

    tracing::info!(
        "Rendered {} of {} caption track(s) for {}",
        result.len(),
        tracks.len(),
        video
    );
    Ok(result)
}

/// Fetch, parse and render a single track
pub async fn process_track(
    fetcher: &dyn DocumentFetcher,
    track: &CaptionTrack,
    options: &PipelineOptions,
) -> TrackOutcome {
    let rendered = async {
        let document = fetch_with_retry(fetcher, &track.fetch_locator, options).await?;
        let cues = subtitle::parse(&document)?;
        tracing::debug!(
            "Parsed {} cue(s) for track '{}' ({})",
            cues.len(),
            track.language_label,
            track.language_code
        );
        Ok::<_, SubtitleError>(SubtitleTrack::render(track, &cues))
    }
    .await;

    match rendered {
        Ok(subtitle_track) => TrackOutcome::Rendered(subtitle_track),
        Err(error) => TrackOutcome::Failed {
            language_label: track.language_label.clone(),
            error,
        },
    }
}

/// Download a document with a timeout per attempt
async fn fetch_with_retry(
    fetcher: &dyn DocumentFetcher,
    locator: &str,
    options: &PipelineOptions,
) -> Result<String> {
    let mut attempt = 0;
    loop {
        let fetch = fetcher.fetch_document(locator);
        let result = match tokio::time::timeout(options.fetch_timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(SubtitleError::Timeout(options.fetch_timeout)),
        };

        match result {
            Ok(document) => return Ok(document),
            Err(e) if attempt < options.retries => {
                attempt += 1;
                tracing::debug!("Retrying {} (attempt {}): {}", locator, attempt + 1, e);
            }
            Err(e) => return Err(e),
        }
    }
}
