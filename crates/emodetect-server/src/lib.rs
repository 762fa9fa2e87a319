//! emodetect Server
//!
//! Web front end that forwards submitted text to the remote EmotionPredict
//! service and renders the scores as a sentence.

pub mod cli;
pub mod config;
pub mod extract;
pub mod render;
pub mod routes;
pub mod security;
pub mod state;

pub use cli::Cli;
pub use config::{MetricsConfig, ServerConfig};
pub use routes::create_router;
pub use state::AppState;
