use crate::types::EmotionReading;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Unreadable response body: {body}")]
    UnexpectedResponse { body: String },

    #[error("Invalid text: input was empty or blank")]
    InvalidText,

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type DetectorResult<T> = Result<T, DetectorError>;

#[async_trait]
pub trait EmotionSource: Send + Sync {
    async fn detect(&self, text: &str) -> DetectorResult<EmotionReading>;

    async fn health_check(&self) -> DetectorResult<()>;

    fn source_name(&self) -> &'static str;
}
