//! Wire format of the EmotionPredict endpoint
//!
//! Request: `{"raw_document": {"text": "..."}}`
//!
//! Response (fields we read):
//! `{"emotionPredictions": [{"emotion": {"anger": 0.1, ...}}]}`
//!
//! Every level of the response is optional at the serde layer; shape
//! requirements are enforced afterwards by [`EmotionPredictResponse::into_scores`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::emotion::{Emotion, EmotionScores};
use crate::error::{Error, Result};

/// Outbound request body
#[derive(Debug, Serialize)]
pub struct EmotionPredictRequest<'a> {
    pub raw_document: RawDocument<'a>,
}

#[derive(Debug, Serialize)]
pub struct RawDocument<'a> {
    pub text: &'a str,
}

impl<'a> EmotionPredictRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            raw_document: RawDocument { text },
        }
    }
}

/// Success response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionPredictResponse {
    pub emotion_predictions: Option<Vec<EmotionPrediction>>,
}

#[derive(Debug, Deserialize)]
pub struct EmotionPrediction {
    pub emotion: Option<EmotionScoresPayload>,
}

/// Raw per-emotion scores.
///
/// Outer `None`: key absent, counts as 0.0. `Some(None)`: key present but
/// `null`, which is rejected during validation.
#[derive(Debug, Default, Deserialize)]
pub struct EmotionScoresPayload {
    #[serde(default, deserialize_with = "present")]
    pub anger: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub disgust: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub fear: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub joy: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub sadness: Option<Option<f64>>,
}

/// Marks a key as present, keeping an explicit `null` as `Some(None)`
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

impl EmotionPredictResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Validate the shape and pull out the first prediction's scores
    pub fn into_scores(self) -> Result<EmotionScores> {
        let predictions = self
            .emotion_predictions
            .ok_or_else(|| Error::malformed("missing emotionPredictions"))?;

        let first = predictions
            .into_iter()
            .next()
            .ok_or_else(|| Error::malformed("emotionPredictions is empty"))?;

        first
            .emotion
            .ok_or_else(|| Error::malformed("first prediction has no emotion block"))?
            .validate()
    }
}

impl EmotionScoresPayload {
    fn validate(self) -> Result<EmotionScores> {
        Ok(EmotionScores::new(
            score(Emotion::Anger, self.anger)?,
            score(Emotion::Disgust, self.disgust)?,
            score(Emotion::Fear, self.fear)?,
            score(Emotion::Joy, self.joy)?,
            score(Emotion::Sadness, self.sadness)?,
        ))
    }
}

fn score(emotion: Emotion, value: Option<Option<f64>>) -> Result<f64> {
    match value {
        None => Ok(0.0),
        Some(Some(value)) => Ok(value),
        Some(None) => Err(Error::malformed(format!("{emotion} score is null"))),
    }
}
