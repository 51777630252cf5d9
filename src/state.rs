//! Application state management
//!
//! This module defines the AppState structure that holds:
//! - Server configuration
//! - The caption track lister and document fetcher
//! - Pipeline options derived from the fetch configuration

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::pipeline::PipelineOptions;
use crate::youtube::{DocumentFetcher, TrackLister, YoutubeClient};

/// Application state shared across all handlers
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,

    /// Caption track discovery
    pub lister: Arc<dyn TrackLister>,

    /// Timed-text document download
    pub fetcher: Arc<dyn DocumentFetcher>,

    /// Per-request pipeline options
    pub pipeline: PipelineOptions,
}

impl AppState {
    /// Create a new AppState backed by the YouTube client
    pub fn new(config: ServerConfig) -> Result<Self> {
        let client = Arc::new(YoutubeClient::new(&config.fetch, &config.youtube)?);
        Ok(Self::with_collaborators(config, client.clone(), client))
    }

    /// Create an AppState with explicit collaborators
    pub fn with_collaborators(
        config: ServerConfig,
        lister: Arc<dyn TrackLister>,
        fetcher: Arc<dyn DocumentFetcher>,
    ) -> Self {
        let pipeline = PipelineOptions::from(&config.fetch);
        Self {
            config,
            lister,
            fetcher,
            pipeline,
        }
    }
}
