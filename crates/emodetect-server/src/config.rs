//! Server configuration

use anyhow::{bail, Context};
use emodetect_core::DetectorConfig;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use crate::cli::Cli;
use crate::security::validate_endpoint;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Remote detector settings
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Metrics configuration
    #[serde(default)]
    pub metrics: MetricsConfig,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: impl AsRef<Path>, cli: &Cli) -> anyhow::Result<Self> {
        let config_path = config_path.as_ref();

        // Try to load from file, or use defaults
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("failed to parse {}", config_path.display()))?
        } else {
            Self::default()
        };

        config.apply_overrides(cli);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI overrides
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(listen) = &cli.listen {
            self.listen = listen.clone();
        }

        if let Some(port) = cli.port {
            self.port = port;
        }

        if let Some(endpoint) = &cli.endpoint {
            self.detector.endpoint = endpoint.clone();
        }

        if let Some(model_id) = &cli.model_id {
            self.detector.model_id = model_id.clone();
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        validate_endpoint(&self.detector.endpoint, self.detector.allow_insecure_endpoint)
            .with_context(|| format!("invalid detector endpoint '{}'", self.detector.endpoint))?;

        if self.max_body_bytes == 0 {
            bail!("max_body_bytes must be greater than zero");
        }

        self.socket_addr()?;
        self.metrics.socket_addr()?;

        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .listen
            .parse()
            .with_context(|| format!("invalid listen address '{}'", self.listen))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            detector: DetectorConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

/// Metrics configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Address for a standalone Prometheus listener; disabled when unset
    #[serde(default)]
    pub listen: Option<String>,
}

impl MetricsConfig {
    pub fn socket_addr(&self) -> anyhow::Result<Option<SocketAddr>> {
        self.listen
            .as_deref()
            .map(|addr| {
                addr.parse::<SocketAddr>()
                    .with_context(|| format!("invalid metrics listen address '{addr}'"))
            })
            .transpose()
    }
}

fn default_listen() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}
