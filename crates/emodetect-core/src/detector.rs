//! Detector trait

use async_trait::async_trait;

use crate::emotion::EmotionResult;

/// Anything that can turn text into an [`EmotionResult`].
///
/// Implementations never fail: every error collapses into
/// [`EmotionResult::Absent`].
#[async_trait]
pub trait EmotionDetector: Send + Sync {
    /// Detect emotions in the given text
    async fn detect(&self, text: &str) -> EmotionResult;

    /// Get the detector name
    fn name(&self) -> &str;
}
