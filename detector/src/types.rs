use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Full message the service returns for blank input. The probe suite only
/// asserts on the "Invalid text" prefix.
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

/// Marker substring that signals an in-band validation error.
pub const INVALID_TEXT_MARKER: &str = "Invalid text";

const DOMINANT_PREFIX: &str = "The dominant emotion is ";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 5] = [
        EmotionLabel::Anger,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Joy,
        EmotionLabel::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Anger => "anger",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Joy => "joy",
            EmotionLabel::Sadness => "sadness",
        }
    }

    /// Case-insensitive substring check against a response body.
    pub fn matches(&self, body: &str) -> bool {
        body.to_lowercase().contains(self.as_str())
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anger" => Ok(EmotionLabel::Anger),
            "disgust" => Ok(EmotionLabel::Disgust),
            "fear" => Ok(EmotionLabel::Fear),
            "joy" => Ok(EmotionLabel::Joy),
            "sadness" => Ok(EmotionLabel::Sadness),
            other => Err(format!("unknown emotion label: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn get(&self, label: EmotionLabel) -> f64 {
        match label {
            EmotionLabel::Anger => self.anger,
            EmotionLabel::Disgust => self.disgust,
            EmotionLabel::Fear => self.fear,
            EmotionLabel::Joy => self.joy,
            EmotionLabel::Sadness => self.sadness,
        }
    }

    /// Highest-scoring label; ties resolve in declaration order.
    pub fn dominant(&self) -> EmotionLabel {
        let mut best = EmotionLabel::Anger;
        for label in EmotionLabel::ALL {
            if self.get(label) > self.get(best) {
                best = label;
            }
        }
        best
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionReading {
    pub scores: EmotionScores,
    pub dominant: EmotionLabel,
}

impl EmotionReading {
    pub fn from_scores(scores: EmotionScores) -> Self {
        let dominant = scores.dominant();
        Self { scores, dominant }
    }

    /// Render the canonical plain-text sentence the service responds with.
    pub fn render(&self) -> String {
        format!(
            "For the given statement, the system response is 'anger': {:.4}, 'disgust': {:.4}, 'fear': {:.4}, 'joy': {:.4} and 'sadness': {:.4}. The dominant emotion is {}.",
            self.scores.anger,
            self.scores.disgust,
            self.scores.fear,
            self.scores.joy,
            self.scores.sadness,
            self.dominant
        )
    }

    /// Parse a response body in the canonical sentence shape. Returns `None`
    /// when any of the five scores is missing; a missing dominant label is
    /// recomputed from the scores.
    pub fn parse(body: &str) -> Option<Self> {
        let scores = EmotionScores {
            anger: score_after(body, EmotionLabel::Anger)?,
            disgust: score_after(body, EmotionLabel::Disgust)?,
            fear: score_after(body, EmotionLabel::Fear)?,
            joy: score_after(body, EmotionLabel::Joy)?,
            sadness: score_after(body, EmotionLabel::Sadness)?,
        };

        let dominant = parse_dominant(body).unwrap_or_else(|| scores.dominant());

        Some(Self { scores, dominant })
    }
}

fn score_after(body: &str, label: EmotionLabel) -> Option<f64> {
    let needle = format!("'{}':", label.as_str());
    let idx = body.find(&needle)?;
    let rest = body[idx + needle.len()..].trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    // The sentence period may sit directly after the last score.
    rest[..end].trim_end_matches('.').parse().ok()
}

fn parse_dominant(body: &str) -> Option<EmotionLabel> {
    let idx = body.find(DOMINANT_PREFIX)?;
    let rest = &body[idx + DOMINANT_PREFIX.len()..];
    let word: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    word.parse().ok()
}
