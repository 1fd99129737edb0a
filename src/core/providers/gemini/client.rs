//! Gemini API client
//!
//! Speaks the Google AI Studio `generateContent` surface: API key as a
//! query parameter, prompt under `contents`, preamble under
//! `system_instruction`. The reply is reduced to the concatenated text
//! parts of the first candidate; everything else about the candidate
//! structure is ignored.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde_json::{Value, json};
use tokio::time::timeout;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::core::providers::EngineError;
use crate::utils::truncate_string;

const SERVICE: &str = "gemini";

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GenerationConfig,
    http_client: Client,
}

impl GeminiClient {
    /// Create a client from configuration
    pub fn new(config: GenerationConfig) -> Result<Self, EngineError> {
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

    /// Send a prompt with a system instruction and return the reply text
    pub async fn generate_content(
        &self,
        system_instruction: &str,
        query: &str,
    ) -> Result<String, EngineError> {
        let body = json!({
            "contents": [{"parts": [{"text": query}]}],
            "system_instruction": {"parts": [{"text": system_instruction}]},
        });

        let url = self.config.endpoint("generateContent");
        debug!(model = %self.config.model, "Sending generation request");

        let response = timeout(
            Duration::from_secs(self.config.request_timeout),
            self.http_client
                .post(&url)
                .query(&[("key", self.config.api_key.as_str())])
                .json(&body)
                .send(),
        )
        .await
        .map_err(|_| EngineError::timeout(SERVICE, self.config.request_timeout))?
        .map_err(|e| self.map_send_error(e))?;

        self.handle_response(response).await
    }

    // reqwest enforces its own deadline alongside the outer one; report
    // both as a timeout so callers see a single variant
    fn map_send_error(&self, error: reqwest::Error) -> EngineError {
        if error.is_timeout() {
            EngineError::timeout(SERVICE, self.config.request_timeout)
        } else {
            EngineError::request(SERVICE, format!("Network error: {}", error))
        }
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<String, EngineError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            EngineError::request(SERVICE, format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            return Err(EngineError::http(SERVICE, status.as_u16(), body));
        }

        let json_response: Value = serde_json::from_str(&body)
            .map_err(|_| EngineError::invalid_body(SERVICE, status.as_u16(), body.clone()))?;

        if let Some(error) = json_response.get("error") {
            return Err(EngineError::request(
                SERVICE,
                format!("API error: {}", error),
            ));
        }

        extract_reply(&json_response)
    }
}

/// Concatenate the text parts of the first candidate
fn extract_reply(response: &Value) -> Result<String, EngineError> {
    let text = response
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
                .collect::<Vec<_>>()
                .join("")
        });

    match text {
        Some(reply) if !reply.trim().is_empty() => Ok(reply),
        _ => Err(EngineError::no_candidates(
            SERVICE,
            truncate_string(&response.to_string(), 512),
        )),
    }
}
