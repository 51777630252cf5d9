//! Server configuration

use serde::{Deserialize, Serialize};

/// Upstream fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Timeout for a single upstream request in seconds
    pub timeout_secs: u64,

    /// Extra attempts after a failed caption download
    pub retries: u32,

    /// Maximum caption tracks processed at the same time for one request
    pub max_concurrent_tracks: usize,

    /// User-Agent sent to YouTube
    pub user_agent: String,

    /// Accept-Language sent to YouTube, controls the track labels
    pub accept_language: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            retries: 1,
            max_concurrent_tracks: 4,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
                .to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
        }
    }
}

impl FetchConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

/// YouTube endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeConfig {
    /// Base URL of the watch page, the video id is appended as `?v=`
    pub watch_url_base: String,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            watch_url_base: "https://www.youtube.com/watch".to_string(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,

    /// Upstream fetch configuration
    pub fetch: FetchConfig,

    /// YouTube endpoint configuration
    pub youtube: YoutubeConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_enabled: true,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            fetch: FetchConfig::default(),
            youtube: YoutubeConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
