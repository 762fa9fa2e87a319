//! Application state shared across all requests

use anyhow::Result;
use emodetect_core::{EmotionDetector, RemoteDetector};
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;

/// Immutable per-process state; cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Detector the handler forwards text to
    pub detector: Arc<dyn EmotionDetector>,
}

impl AppState {
    /// Initialize application state with the remote detector from configuration
    pub fn new(config: ServerConfig) -> Result<Self> {
        let detector = RemoteDetector::new(&config.detector)?;
        info!(
            endpoint = detector.endpoint(),
            model_id = %config.detector.model_id,
            "Remote detector ready"
        );

        Ok(Self::with_detector(config, Arc::new(detector)))
    }

    /// Build state around an existing detector
    pub fn with_detector(config: ServerConfig, detector: Arc<dyn EmotionDetector>) -> Self {
        Self {
            config: Arc::new(config),
            detector,
        }
    }
}
