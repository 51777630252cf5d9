//! Configuration file support
//!
//! Loads server configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{FetchConfig, ServerConfig, YoutubeConfig};

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Server settings
    pub server: ServerSettings,
    /// Upstream fetch settings
    pub fetch: Option<FetchSettings>,
    /// YouTube endpoint settings
    pub youtube: Option<YoutubeSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS
    pub cors_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSettings {
    /// Timeout for one upstream request in seconds
    pub timeout_secs: Option<u64>,
    /// Extra attempts after a failed caption download
    pub retries: Option<u32>,
    /// Caption tracks processed at the same time
    pub max_concurrent_tracks: Option<usize>,
    /// User-Agent sent to YouTube
    pub user_agent: Option<String>,
    /// Accept-Language sent to YouTube
    pub accept_language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeSettings {
    /// Base URL of the watch page
    pub watch_url_base: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        let fetch = FetchConfig::default();
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_enabled: Some(true),
            },
            fetch: Some(FetchSettings {
                timeout_secs: Some(fetch.timeout_secs),
                retries: Some(fetch.retries),
                max_concurrent_tracks: Some(fetch.max_concurrent_tracks),
                user_agent: Some(fetch.user_agent),
                accept_language: Some(fetch.accept_language),
            }),
            youtube: Some(YoutubeSettings {
                watch_url_base: Some(YoutubeConfig::default().watch_url_base),
            }),
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some("pretty".to_string()),
            }),
        }
    }

    /// Convert to ServerConfig
    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();

        let fetch = match self.fetch {
            Some(f) => FetchConfig {
                timeout_secs: f.timeout_secs.unwrap_or(defaults.fetch.timeout_secs),
                retries: f.retries.unwrap_or(defaults.fetch.retries),
                max_concurrent_tracks: f
                    .max_concurrent_tracks
                    .unwrap_or(defaults.fetch.max_concurrent_tracks),
                user_agent: f.user_agent.unwrap_or(defaults.fetch.user_agent),
                accept_language: f.accept_language.unwrap_or(defaults.fetch.accept_language),
            },
            None => defaults.fetch,
        };

        let youtube = YoutubeConfig {
            watch_url_base: self
                .youtube
                .and_then(|y| y.watch_url_base)
                .unwrap_or(defaults.youtube.watch_url_base),
        };

        let (log_level, log_format) = match self.logging {
            Some(l) => (l.level, l.format.unwrap_or(defaults.log_format)),
            None => (defaults.log_level, defaults.log_format),
        };

        ServerConfig {
            host: self.server.host,
            port: self.server.port,
            cors_enabled: self.server.cors_enabled.unwrap_or(true),
            log_level,
            log_format,
            fetch,
            youtube,
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
