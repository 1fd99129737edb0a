//! Translation upstream configuration

use super::default_connect_timeout;
use serde::{Deserialize, Serialize};

/// Source-language sentinel requesting auto-detection
pub const AUTO_SOURCE: &str = "auto";

/// Configuration for the translation upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Base URL of the translation API
    #[serde(default = "default_translation_base_url")]
    pub base_url: String,
    /// Optional API key, sent in the request body when present
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_translation_timeout")]
    pub request_timeout: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Forced source locale for the retry after a failed auto-detect attempt.
    /// EchoCode's audience speaks Hinglish, which auto-detection routinely
    /// misclassifies on short transliterated input.
    #[serde(default = "default_fallback_source")]
    pub fallback_source: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            base_url: default_translation_base_url(),
            api_key: None,
            request_timeout: default_translation_timeout(),
            connect_timeout: default_connect_timeout(),
            fallback_source: default_fallback_source(),
        }
    }
}

impl TranslationConfig {
    /// Build the translation endpoint URL
    pub fn endpoint(&self) -> String {
        format!("{}/translate", self.base_url.trim_end_matches('/'))
    }

    /// Validate translation configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Translation base URL cannot be empty".to_string());
        }
        if self.request_timeout == 0 {
            return Err("Translation request timeout cannot be 0".to_string());
        }
        if self.fallback_source.trim().is_empty() {
            return Err("Fallback source locale cannot be empty".to_string());
        }
        if self.fallback_source == AUTO_SOURCE {
            return Err("Fallback source locale cannot be the auto-detect sentinel".to_string());
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn new_test(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            request_timeout: 2,
            connect_timeout: 1,
            ..Default::default()
        }
    }
}

fn default_translation_base_url() -> String {
    "https://libretranslate.com".to_string()
}

fn default_translation_timeout() -> u64 {
    10
}

fn default_fallback_source() -> String {
    "hi".to_string()
}
