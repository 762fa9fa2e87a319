//! Detector client configuration

use serde::{Deserialize, Serialize};

/// Watson NLP EmotionPredict endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// Model served behind [`DEFAULT_ENDPOINT`]
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

/// Header the remote service reads the model identifier from
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// Remote detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Full URL of the EmotionPredict endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Value sent in the model identifier header
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Whole-request timeout; `None` keeps the HTTP client's default
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Accept plain `http://` endpoints (local fakes, development)
    #[serde(default)]
    pub allow_insecure_endpoint: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model_id: default_model_id(),
            timeout_secs: None,
            allow_insecure_endpoint: false,
        }
    }
}

impl DetectorConfig {
    /// Configuration pointing at a different endpoint, everything else default
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}
