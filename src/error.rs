use thiserror::Error;

/// Main error type for the subtitle server
#[derive(Error, Debug)]
pub enum SubtitleError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Video not found: {0}")]
    VideoNotFound(String),

    #[error("No caption tracks found for video {0}")]
    NoTracks(String),

    #[error("Malformed timed-text document: {0}")]
    MalformedDocument(String),

    #[error("No caption track could be processed")]
    NoUsableSubtitles,

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Fetch timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SubtitleError {
    /// Whether the error is confined to a single caption track
    pub fn is_track_local(&self) -> bool {
        matches!(
            self,
            SubtitleError::MalformedDocument(_)
                | SubtitleError::Fetch(_)
                | SubtitleError::Timeout(_)
                | SubtitleError::Http(_)
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SubtitleError>;
