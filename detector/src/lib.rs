pub mod config;
pub mod endpoint;
pub mod lexicon;
pub mod source;
pub mod types;

pub use config::EndpointConfig;
pub use endpoint::EndpointClient;
pub use lexicon::LexiconDetector;
pub use source::{DetectorError, DetectorResult, EmotionSource};
pub use types::{EmotionLabel, EmotionReading, EmotionScores, INVALID_TEXT_MESSAGE};

pub mod prelude {
    pub use crate::config::*;
    pub use crate::endpoint::*;
    pub use crate::lexicon::*;
    pub use crate::source::*;
    pub use crate::types::*;
}
