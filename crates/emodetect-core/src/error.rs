//! Error types for emotion detection

use reqwest::StatusCode;

/// Result type alias using emodetect's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between sending text and holding scores
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection, DNS, TLS or timeout failures
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered 400, its convention for blank or bad text
    #[error("remote service rejected the input text")]
    InvalidInput,

    /// Any other non-success status from the remote service
    #[error("remote service returned status {0}")]
    Status(StatusCode),

    /// Body was not JSON, or not the expected schema
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Body parsed but failed validation
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new malformed-response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short label for logs and metric tags
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::InvalidInput => "invalid_input",
            Self::Status(_) => "status",
            Self::Deserialize(_) => "deserialize",
            Self::MalformedResponse(_) => "malformed",
            Self::Config(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(Error::InvalidInput.kind(), "invalid_input");
        assert_eq!(Error::Status(StatusCode::BAD_GATEWAY).kind(), "status");
        assert_eq!(Error::malformed("empty").kind(), "malformed");
        assert_eq!(Error::config("bad header").kind(), "config");
    }

    #[test]
    fn test_display() {
        let err = Error::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.to_string(),
            "remote service returned status 503 Service Unavailable"
        );
        assert_eq!(
            Error::malformed("emotionPredictions is empty").to_string(),
            "malformed response: emotionPredictions is empty"
        );
    }
}
