//! HTTP client for the remote EmotionPredict service

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::config::{DetectorConfig, MODEL_ID_HEADER};
use crate::detector::EmotionDetector;
use crate::emotion::{EmotionResult, EmotionScores};
use crate::error::{Error, Result};
use crate::schema::{EmotionPredictRequest, EmotionPredictResponse};

/// Detector backed by one POST to the remote classification endpoint
#[derive(Debug, Clone)]
pub struct RemoteDetector {
    client: Client,
    endpoint: String,
    model_id: HeaderValue,
}

impl RemoteDetector {
    /// Build a detector with its own HTTP client
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Self::with_client(client, config)
    }

    /// Build a detector sharing an existing HTTP client
    pub fn with_client(client: Client, config: &DetectorConfig) -> Result<Self> {
        let model_id = HeaderValue::from_str(&config.model_id)
            .map_err(|e| Error::config(format!("invalid model id '{}': {e}", config.model_id)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model_id,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `text` to the remote service, keeping failure causes distinct
    pub async fn try_detect(&self, text: &str) -> Result<EmotionScores> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(MODEL_ID_HEADER, self.model_id.clone())
            .json(&EmotionPredictRequest::new(text))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            return Err(Error::InvalidInput);
        }
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.bytes().await?;
        EmotionPredictResponse::from_slice(&body)?.into_scores()
    }
}

#[async_trait]
impl EmotionDetector for RemoteDetector {
    async fn detect(&self, text: &str) -> EmotionResult {
        let start = Instant::now();
        let outcome = self.try_detect(text).await;

        metrics::histogram!("emodetect_remote_latency_us")
            .record(start.elapsed().as_micros() as f64);

        match outcome {
            Ok(scores) => {
                debug!(dominant = %scores.dominant(), "remote detection succeeded");
                EmotionResult::Detected(scores)
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "remote detection failed");
                EmotionResult::Absent
            }
        }
    }

    fn name(&self) -> &str {
        "watson-emotion-predict"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unusable_model_id() {
        let config = DetectorConfig {
            model_id: "bad\nvalue".to_string(),
            ..Default::default()
        };
        let result = RemoteDetector::new(&config);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_keeps_configured_endpoint() {
        let config = DetectorConfig::with_endpoint("http://127.0.0.1:1/predict");
        let detector = RemoteDetector::new(&config).unwrap();
        assert_eq!(detector.endpoint(), "http://127.0.0.1:1/predict");
        assert_eq!(detector.name(), "watson-emotion-predict");
    }
}
