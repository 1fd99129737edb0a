//! HTTP client for the translation API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::config::TranslationConfig;
use crate::core::providers::EngineError;

use super::{EngineTranslation, TranslationEngine};

const SERVICE: &str = "translation";

/// Client for the translation API (LibreTranslate-compatible JSON)
#[derive(Debug, Clone)]
pub struct HttpTranslateClient {
    config: TranslationConfig,
    http_client: Client,
}

#[derive(Serialize)]
struct TranslateRequestBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponseBody {
    #[serde(rename = "translatedText")]
    translated_text: String,
    #[serde(rename = "detectedLanguage")]
    detected_language: Option<DetectedLanguage>,
}

#[derive(Deserialize)]
struct DetectedLanguage {
    language: String,
}

impl HttpTranslateClient {
    /// Create a client from configuration
    pub fn new(config: TranslationConfig) -> Result<Self, EngineError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| {
                EngineError::request(SERVICE, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl TranslationEngine for HttpTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<EngineTranslation, EngineError> {
        let url = self.config.endpoint();
        let body = TranslateRequestBody {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.config.api_key.as_deref(),
        };

        let response = timeout(
            Duration::from_secs(self.config.request_timeout),
            self.http_client.post(&url).json(&body).send(),
        )
        .await
        .map_err(|_| EngineError::timeout(SERVICE, self.config.request_timeout))?
        .map_err(|e| map_send_error(e, self.config.request_timeout))?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            EngineError::request(SERVICE, format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            return Err(EngineError::http(SERVICE, status.as_u16(), raw));
        }

        let parsed: TranslateResponseBody = serde_json::from_str(&raw)
            .map_err(|_| EngineError::invalid_body(SERVICE, status.as_u16(), raw.clone()))?;

        Ok(EngineTranslation {
            text: parsed.translated_text,
            detected_source: parsed.detected_language.map(|d| d.language),
        })
    }
}

// reqwest enforces its own deadline alongside the outer one; report
// both as a timeout so callers see a single variant
fn map_send_error(error: reqwest::Error, seconds: u64) -> EngineError {
    if error.is_timeout() {
        EngineError::timeout(SERVICE, seconds)
    } else {
        EngineError::request(SERVICE, format!("Network error: {}", error))
    }
}
