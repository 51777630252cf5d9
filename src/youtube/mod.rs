//! YouTube collaborators
//!
//! This module covers everything that talks to YouTube:
//! - Video URL validation and id extraction
//! - Caption track discovery from the watch page player response
//! - Timed-text document download

pub mod client;
pub mod video_id;

use async_trait::async_trait;

use crate::error::Result;

pub use client::YoutubeClient;
pub use video_id::VideoId;

/// One caption track advertised for a video
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionTrack {
    /// Human readable language name, e.g. "English (auto-generated)"
    pub language_label: String,
    /// BCP-47 style language code, e.g. "en"
    pub language_code: String,
    /// Whether YouTube offers machine translation for this track
    pub is_translatable: bool,
    /// Where to download the timed-text document from
    pub fetch_locator: String,
}

/// Lists the caption tracks of a video.
#[async_trait]
pub trait TrackLister: Send + Sync {
    /// Fails with `VideoNotFound` for unknown videos and `NoTracks` when the
    /// video has no captions at all.
    async fn list_tracks(&self, video: &VideoId) -> Result<Vec<CaptionTrack>>;
}

/// Downloads raw timed-text documents.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch_document(&self, locator: &str) -> Result<String>;
}
