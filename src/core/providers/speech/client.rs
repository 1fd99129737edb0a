//! HTTP client for the speech-recognition API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use tokio::time::timeout;
use tracing::debug;

use crate::config::SpeechConfig;
use crate::core::audio::DecodedAudio;
use crate::core::providers::EngineError;

use super::{RecognitionEngine, RecognizeOutcome};

const SERVICE: &str = "speech";

/// Client for the recognition API
///
/// One POST per locale attempt: the canonical WAV body with `lang` and
/// `key` query parameters. A well-formed reply with an empty `result`
/// array is the engine's no-match signal.
#[derive(Debug, Clone)]
pub struct HttpSpeechClient {
    config: SpeechConfig,
    http_client: Client,
}

impl HttpSpeechClient {
    /// Create a client from configuration
    pub fn new(config: SpeechConfig) -> Result<Self, EngineError> {
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
impl RecognitionEngine for HttpSpeechClient {
    async fn recognize(
        &self,
        audio: &DecodedAudio,
        locale: &str,
    ) -> Result<RecognizeOutcome, EngineError> {
        let url = self.config.endpoint();

        let response = timeout(
            Duration::from_secs(self.config.request_timeout),
            self.http_client
                .post(&url)
                .query(&[("lang", locale), ("key", self.config.api_key.as_str())])
                .header(CONTENT_TYPE, "audio/wav")
                .body(audio.wav_bytes().to_vec())
                .send(),
        )
        .await
        .map_err(|_| EngineError::timeout(SERVICE, self.config.request_timeout))?
        .map_err(|e| map_send_error(e, self.config.request_timeout))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            EngineError::request(SERVICE, format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            return Err(EngineError::http(SERVICE, status.as_u16(), body));
        }

        let json: Value = serde_json::from_str(&body)
            .map_err(|_| EngineError::invalid_body(SERVICE, status.as_u16(), body.clone()))?;

        match extract_transcript(&json) {
            Some(text) => Ok(RecognizeOutcome::Match { text }),
            None => {
                debug!(locale, "Recognition returned no match");
                Ok(RecognizeOutcome::NoMatch)
            }
        }
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

/// Pull the first non-empty transcript out of a recognition reply
///
/// Reply shape: `{"result": [{"alternative": [{"transcript": "..."}]}]}`
/// with an empty `result` array when nothing was recognized.
fn extract_transcript(response: &Value) -> Option<String> {
    response
        .get("result")
        .and_then(|r| r.as_array())
        .and_then(|results| {
            results.iter().find_map(|result| {
                result
                    .get("alternative")
                    .and_then(|a| a.as_array())
                    .and_then(|alternatives| alternatives.first())
                    .and_then(|alt| alt.get("transcript"))
                    .and_then(|t| t.as_str())
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
            })
        })
}
