//! Emotion categories, score records and the per-request detection result

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// The five emotion categories reported by the remote service
///
/// Declaration order is significant: it is the tie-break order used when
/// picking the dominant emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// All emotions in tie-break order
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    /// Lowercase name, as used on the wire and in rendered sentences
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anger => "anger",
            Self::Disgust => "disgust",
            Self::Fear => "fear",
            Self::Joy => "joy",
            Self::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores for all five emotions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn new(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> Self {
        Self {
            anger,
            disgust,
            fear,
            joy,
            sadness,
        }
    }

    /// Score for a single emotion
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// `(emotion, score)` pairs in [`Emotion::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> {
        let scores = *self;
        Emotion::ALL
            .into_iter()
            .map(move |emotion| (emotion, scores.score(emotion)))
    }

    /// The emotion with the highest score.
    ///
    /// Only a strictly greater score displaces the current leader, so equal
    /// maxima resolve to whichever emotion comes first in [`Emotion::ALL`].
    pub fn dominant(&self) -> Emotion {
        let mut pairs = self.iter();
        let (mut best, mut best_score) = match pairs.next() {
            Some(first) => first,
            None => return Emotion::Anger,
        };

        for (emotion, score) in pairs {
            if score > best_score {
                best = emotion;
                best_score = score;
            }
        }

        best
    }
}

/// Outcome of one detection call.
///
/// Either every score and the dominant emotion are known, or none of them
/// are. There is no way to build a partially filled result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmotionResult {
    /// The remote service returned usable scores
    Detected(EmotionScores),
    /// Input was rejected or the call failed
    Absent,
}

impl EmotionResult {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn scores(&self) -> Option<&EmotionScores> {
        match self {
            Self::Detected(scores) => Some(scores),
            Self::Absent => None,
        }
    }

    pub fn anger(&self) -> Option<f64> {
        self.scores().map(|s| s.anger)
    }

    pub fn disgust(&self) -> Option<f64> {
        self.scores().map(|s| s.disgust)
    }

    pub fn fear(&self) -> Option<f64> {
        self.scores().map(|s| s.fear)
    }

    pub fn joy(&self) -> Option<f64> {
        self.scores().map(|s| s.joy)
    }

    pub fn sadness(&self) -> Option<f64> {
        self.scores().map(|s| s.sadness)
    }

    pub fn dominant_emotion(&self) -> Option<Emotion> {
        self.scores().map(EmotionScores::dominant)
    }
}

impl From<EmotionScores> for EmotionResult {
    fn from(scores: EmotionScores) -> Self {
        Self::Detected(scores)
    }
}

// Flat six-field shape with nulls for the absent case.
impl Serialize for EmotionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EmotionResult", 6)?;
        state.serialize_field("anger", &self.anger())?;
        state.serialize_field("disgust", &self.disgust())?;
        state.serialize_field("fear", &self.fear())?;
        state.serialize_field("joy", &self.joy())?;
        state.serialize_field("sadness", &self.sadness())?;
        state.serialize_field("dominant_emotion", &self.dominant_emotion())?;
        state.end()
    }
}
