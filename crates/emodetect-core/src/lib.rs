//! emodetect Core
//!
//! Emotion types and the client for the remote EmotionPredict service.
//!
//! This crate provides:
//! - The five-category [`Emotion`] enum and [`EmotionScores`] record
//! - [`EmotionResult`], which is either fully populated or fully absent
//! - The [`EmotionDetector`] trait and its HTTP implementation [`RemoteDetector`]
//! - Error types and result handling

pub mod client;
pub mod config;
pub mod detector;
pub mod emotion;
pub mod error;
pub mod schema;

pub use client::RemoteDetector;
pub use config::{DetectorConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL_ID, MODEL_ID_HEADER};
pub use detector::EmotionDetector;
pub use emotion::{Emotion, EmotionResult, EmotionScores};
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::detector::EmotionDetector;
    pub use crate::emotion::{Emotion, EmotionResult, EmotionScores};
    pub use crate::error::{Error, Result};
}
