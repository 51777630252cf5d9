//! YouTube video URL validation

use std::fmt;

use url::Url;

use crate::error::{Result, SubtitleError};

/// An 11 character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Validate a bare video identifier
    pub fn new(id: &str) -> Option<Self> {
        if regex!(r"^[A-Za-z0-9_-]{11}$").is_match(id) {
            Some(VideoId(id.to_string()))
        } else {
            None
        }
    }

    /// Extract the video identifier from a YouTube video URL.
    ///
    /// Accepts watch, short-link, embed, shorts, live and `/v/` URLs on
    /// the youtube.com and youtu.be hosts.
    pub fn from_url(input: &str) -> Result<Self> {
        let invalid = || SubtitleError::InvalidInput(format!("not a YouTube video URL: {}", input));

        let input = input.trim();
        let url = Url::parse(input)
            .or_else(|_| Url::parse(&format!("https://{}", input)))
            .map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        let host = url.host_str().ok_or_else(invalid)?.to_ascii_lowercase();

        let candidate = if host == "youtu.be" {
            url.path_segments().and_then(|mut segs| segs.next()).map(str::to_string)
        } else if is_youtube_host(&host) {
            let mut segs = url.path_segments().into_iter().flatten();
            match (segs.next(), segs.next()) {
                (Some("watch"), _) => url
                    .query_pairs()
                    .find(|(k, _)| k == "v")
                    .map(|(_, v)| v.into_owned()),
                (Some("embed" | "shorts" | "live" | "v"), Some(id)) => Some(id.to_string()),
                _ => None,
            }
        } else {
            None
        };

        candidate
            .as_deref()
            .and_then(VideoId::new)
            .ok_or_else(invalid)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_youtube_host(host: &str) -> bool {
    matches!(
        host,
        "youtube.com" | "www.youtube.com" | "m.youtube.com" | "music.youtube.com"
    )
}
