//! Test fixtures
//!
//! In-memory track lister and document fetcher, plus sample documents.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::{Result, SubtitleError};
use crate::state::AppState;
use crate::youtube::{CaptionTrack, DocumentFetcher, TrackLister, VideoId};

pub const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

pub const ENGLISH_TRANSCRIPT: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript><text start="0" dur="2">A</text><text start="2" dur="2">B</text></transcript>"#;

pub const GERMAN_TRANSCRIPT: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript><text start="1.25" dur="1.5">Hallo &lt;i&gt;Welt&lt;/i&gt;
zusammen</text></transcript>"#;

pub const BROKEN_TRANSCRIPT: &str = r#"<transcript><text start="one" dur="2">A</text></transcript>"#;

/// What the lister answers with
pub enum Listing {
    Tracks(Vec<CaptionTrack>),
    VideoNotFound,
    Unavailable,
}

/// Track lister serving a fixed answer
pub struct StaticLister(pub Listing);

#[async_trait]
impl TrackLister for StaticLister {
    async fn list_tracks(&self, video: &VideoId) -> Result<Vec<CaptionTrack>> {
        match &self.0 {
            Listing::Tracks(tracks) => Ok(tracks.clone()),
            Listing::VideoNotFound => Err(SubtitleError::VideoNotFound(video.to_string())),
            Listing::Unavailable => Err(SubtitleError::Fetch("connection reset".to_string())),
        }
    }
}

/// Document fetcher serving documents from a map
#[derive(Default)]
pub struct StaticFetcher {
    pub documents: HashMap<String, String>,
    pub calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn with(mut self, locator: &str, document: &str) -> Self {
        self.documents
            .insert(locator.to_string(), document.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentFetcher for StaticFetcher {
    async fn fetch_document(&self, locator: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(locator)
            .cloned()
            .ok_or_else(|| SubtitleError::Fetch(format!("404 for {}", locator)))
    }
}

pub fn caption_track(label: &str, code: &str, translatable: bool) -> CaptionTrack {
    CaptionTrack {
        language_label: label.to_string(),
        language_code: code.to_string(),
        is_translatable: translatable,
        fetch_locator: locator(code),
    }
}

pub fn locator(code: &str) -> String {
    format!("https://www.youtube.com/api/timedtext?v=dQw4w9WgXcQ&lang={}", code)
}

/// Build application state around the given collaborators
pub fn test_state(lister: StaticLister, fetcher: Arc<StaticFetcher>) -> Arc<AppState> {
    let mut config = ServerConfig::default();
    config.fetch.retries = 0;
    Arc::new(AppState::with_collaborators(
        config,
        Arc::new(lister),
        fetcher,
    ))
}
