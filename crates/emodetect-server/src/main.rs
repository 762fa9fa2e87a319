//! emodetect Server
//!
//! Serves `/emotionDetector`, which forwards text to the remote EmotionPredict
//! service and renders the returned scores as a sentence.

use anyhow::Result;
use clap::Parser;
use emodetect_server::{create_router, AppState, Cli, ServerConfig};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    info!("Starting emodetect server");

    // Load configuration
    let config = ServerConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!("Detector endpoint: {}", config.detector.endpoint);

    // Prometheus exporter runs on its own listener when configured
    if let Some(metrics_addr) = config.metrics.socket_addr()? {
        init_metrics(metrics_addr)?;
    }

    let addr = config.socket_addr()?;
    let state = AppState::new(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    let shutdown = async {
        shutdown_signal().await;
        warn!("Shutdown signal received, stopping server...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(error) => {
                warn!(%error, "SIGTERM handler unavailable");
                ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    ctrl_c().await;
}

/// Ctrl+C, never resolving if the handler cannot be installed
async fn ctrl_c() {
    if let Err(error) = signal::ctrl_c().await {
        warn!(%error, "Ctrl+C handler unavailable");
        std::future::pending::<()>().await;
    }
}

/// Log to stdout; `RUST_LOG` wins unless `--verbose` is given
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    const DEFAULT_FILTER: &str = "emodetect_server=info,emodetect_core=info";
    const VERBOSE_FILTER: &str = "emodetect_server=debug,emodetect_core=debug,tower_http=debug";

    let filter = match (verbose, EnvFilter::try_from_default_env()) {
        (false, Ok(from_env)) => from_env,
        (false, Err(_)) => EnvFilter::new(DEFAULT_FILTER),
        (true, _) => EnvFilter::new(VERBOSE_FILTER),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Install the Prometheus recorder with its HTTP listener
fn init_metrics(addr: SocketAddr) -> Result<()> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "emodetect_requests_total",
        "Total number of detection requests received"
    );
    metrics::describe_counter!(
        "emodetect_detections_total",
        "Detection outcomes, detected or absent"
    );
    metrics::describe_histogram!(
        "emodetect_remote_latency_us",
        metrics::Unit::Microseconds,
        "Round-trip latency of the remote EmotionPredict call"
    );

    info!("Metrics exporter listening on http://{}", addr);
    Ok(())
}
