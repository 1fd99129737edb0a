//! Code-generation (LLM) upstream configuration

use super::default_connect_timeout;
use serde::{Deserialize, Serialize};

/// Configuration for the Gemini-style text-generation upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// API key (also settable via `GEMINI_API_KEY` / `GOOGLE_API_KEY`)
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the generation API
    #[serde(default = "default_generation_base_url")]
    pub base_url: String,
    /// API version path segment
    #[serde(default = "default_generation_api_version")]
    pub api_version: String,
    /// Model identifier
    #[serde(default = "default_generation_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_generation_timeout")]
    pub request_timeout: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_generation_base_url(),
            api_version: default_generation_api_version(),
            model: default_generation_model(),
            request_timeout: default_generation_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl GenerationConfig {
    /// Build the full endpoint URL for a model operation
    pub fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            self.model,
            operation
        )
    }

    /// Validate generation configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Generation base URL cannot be empty".to_string());
        }
        if self.model.is_empty() {
            return Err("Generation model cannot be empty".to_string());
        }
        if self.request_timeout == 0 {
            return Err("Generation request timeout cannot be 0".to_string());
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn new_test(base_url: &str) -> Self {
        Self {
            api_key: "test-key".to_string(),
            base_url: base_url.to_string(),
            request_timeout: 2,
            connect_timeout: 1,
            ..Default::default()
        }
    }
}

fn default_generation_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_generation_api_version() -> String {
    "v1beta".to_string()
}

fn default_generation_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_generation_timeout() -> u64 {
    30
}
