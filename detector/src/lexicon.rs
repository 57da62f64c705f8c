//! Local keyword-lexicon detector, for running classifications without the
//! HTTP service.

use crate::source::{DetectorError, DetectorResult, EmotionSource};
use crate::types::{EmotionLabel, EmotionReading, EmotionScores};
use async_trait::async_trait;
use tracing::debug;

const ANGER_WORDS: &[&str] = &[
    "mad", "angry", "furious", "hate", "annoyed", "outraged", "irritated", "rage",
];
const DISGUST_WORDS: &[&str] = &[
    "disgusting",
    "gross",
    "revolting",
    "nasty",
    "sickening",
    "repulsive",
    "vile",
];
const FEAR_WORDS: &[&str] = &[
    "afraid",
    "scared",
    "fear",
    "terrified",
    "anxious",
    "worried",
    "nervous",
    "dread",
];
const JOY_WORDS: &[&str] = &[
    "love",
    "happy",
    "fun",
    "great",
    "wonderful",
    "excited",
    "delighted",
    "glad",
    "enjoy",
    "fantastic",
];
const SADNESS_WORDS: &[&str] = &[
    "sad",
    "unhappy",
    "miserable",
    "depressed",
    "heartbroken",
    "grief",
    "crying",
    "lonely",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconDetector;

impl LexiconDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify text by keyword hits, normalized across the five emotions.
    /// Blank input is the only error case.
    pub fn read(&self, text: &str) -> DetectorResult<EmotionReading> {
        if text.trim().is_empty() {
            return Err(DetectorError::InvalidText);
        }

        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let anger = count_hits(&words, ANGER_WORDS);
        let disgust = count_hits(&words, DISGUST_WORDS);
        let fear = count_hits(&words, FEAR_WORDS);
        let joy = count_hits(&words, JOY_WORDS);
        let sadness = count_hits(&words, SADNESS_WORDS);

        let total = anger + disgust + fear + joy + sadness;
        if total == 0.0 {
            debug!("No lexicon hits in {} words, falling back to neutral", words.len());
            return Ok(EmotionReading {
                scores: EmotionScores {
                    anger: 0.2,
                    disgust: 0.2,
                    fear: 0.2,
                    joy: 0.2,
                    sadness: 0.2,
                },
                dominant: EmotionLabel::Joy,
            });
        }

        let scores = EmotionScores {
            anger: anger / total,
            disgust: disgust / total,
            fear: fear / total,
            joy: joy / total,
            sadness: sadness / total,
        };

        Ok(EmotionReading::from_scores(scores))
    }
}

fn count_hits(words: &[&str], lexicon: &[&str]) -> f64 {
    words
        .iter()
        .copied()
        .filter(|word| lexicon.contains(word))
        .count() as f64
}

#[async_trait]
impl EmotionSource for LexiconDetector {
    async fn detect(&self, text: &str) -> DetectorResult<EmotionReading> {
        self.read(text)
    }

    async fn health_check(&self) -> DetectorResult<()> {
        Ok(())
    }

    fn source_name(&self) -> &'static str {
        "lexicon"
    }
}
