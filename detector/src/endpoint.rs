use crate::config::EndpointConfig;
use crate::source::{DetectorError, DetectorResult, EmotionSource};
use crate::types::{EmotionReading, INVALID_TEXT_MARKER};
use async_trait::async_trait;
use tracing::{debug, error, info};

const DETECT_PATH: &str = "emotionDetector";
const TEXT_PARAM: &str = "textToAnalyze";

pub struct EndpointClient {
    http_client: reqwest::Client,
    base_url: String,
    config: EndpointConfig,
}

impl EndpointClient {
    pub fn new(config: EndpointConfig) -> DetectorResult<Self> {
        config
            .validate()
            .map_err(|msg| DetectorError::InvalidConfig { message: msg })?;

        let base_url = if config.base_url.ends_with('/') {
            config.base_url.clone()
        } else {
            format!("{}/", config.base_url)
        };

        let http_client = reqwest::Client::builder()
            .timeout(config.probe_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            config,
        })
    }

    pub fn with_default_config() -> DetectorResult<Self> {
        Self::new(EndpointConfig::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_transport_error(e: reqwest::Error) -> DetectorError {
        if e.is_timeout() {
            DetectorError::ServiceUnavailable {
                message: "Request timeout".to_string(),
            }
        } else if e.is_connect() {
            DetectorError::ServiceUnavailable {
                message: "Cannot connect to emotion service".to_string(),
            }
        } else {
            DetectorError::Network(e)
        }
    }

    /// Liveness ping against the root path. Exactly 200 means alive.
    pub async fn ping(&self) -> DetectorResult<()> {
        debug!("Pinging {}", self.base_url);

        let response = self
            .http_client
            .get(&self.base_url)
            .timeout(self.config.health_timeout)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(DetectorError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    /// Issue a classification probe and return the raw status code and body
    /// without interpreting either. The suite asserts on these directly.
    pub async fn detect_raw(&self, text: &str) -> DetectorResult<(u16, String)> {
        let url = format!("{}{}", self.base_url, DETECT_PATH);
        debug!("Probing {} with {} bytes of text", url, text.len());

        let response = self
            .http_client
            .get(&url)
            .query(&[(TEXT_PARAM, text)])
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(DetectorError::Network)?;

        debug!("Probe returned status {} ({} byte body)", status, body.len());

        Ok((status, body))
    }
}

#[async_trait]
impl EmotionSource for EndpointClient {
    async fn detect(&self, text: &str) -> DetectorResult<EmotionReading> {
        let (status, body) = self.detect_raw(text).await?;

        if status != 200 {
            return Err(DetectorError::UnexpectedStatus { status });
        }

        if body.contains(INVALID_TEXT_MARKER) {
            return Err(DetectorError::InvalidText);
        }

        let reading =
            EmotionReading::parse(&body).ok_or(DetectorError::UnexpectedResponse { body })?;

        info!("Endpoint classified text as {}", reading.dominant);
        Ok(reading)
    }

    async fn health_check(&self) -> DetectorResult<()> {
        match self.ping().await {
            Ok(()) => {
                info!("Health check passed");
                Ok(())
            }
            Err(e) => {
                error!("Health check failed: {}", e);
                Err(e)
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "endpoint"
    }
}
