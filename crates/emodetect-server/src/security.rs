//! Endpoint URL validation
//!
//! The detector endpoint is checked once, when configuration is loaded.

use thiserror::Error;
use url::Url;

/// Endpoint validation errors
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("URL scheme '{0}' is not allowed, only HTTPS is permitted")]
    InvalidScheme(String),

    #[error("URL must have a host")]
    MissingHost,
}

/// Validate the detector endpoint.
///
/// `https` is always accepted; `http` only when `allow_http` is set.
pub fn validate_endpoint(endpoint: &str, allow_http: bool) -> Result<Url, EndpointError> {
    let url = Url::parse(endpoint)?;

    match url.scheme() {
        "https" => {}
        "http" if allow_http => {}
        other => return Err(EndpointError::InvalidScheme(other.to_string())),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(EndpointError::MissingHost),
    }
}
