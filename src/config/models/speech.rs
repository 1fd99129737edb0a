//! Speech-recognition upstream configuration

use super::default_connect_timeout;
use serde::{Deserialize, Serialize};

/// Configuration for the speech-recognition upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// API key (also settable via `SPEECH_API_KEY`)
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the recognition API
    #[serde(default = "default_speech_base_url")]
    pub base_url: String,
    /// Per-attempt request timeout in seconds
    #[serde(default = "default_speech_timeout")]
    pub request_timeout: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Maximum accepted audio upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Locale priority override; the built-in list is used when absent
    pub locales: Option<Vec<String>>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_speech_base_url(),
            request_timeout: default_speech_timeout(),
            connect_timeout: default_connect_timeout(),
            max_upload_bytes: default_max_upload_bytes(),
            locales: None,
        }
    }
}

impl SpeechConfig {
    /// Build the recognition endpoint URL
    pub fn endpoint(&self) -> String {
        format!("{}/v2/recognize", self.base_url.trim_end_matches('/'))
    }

    /// Validate speech configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Speech base URL cannot be empty".to_string());
        }
        if self.request_timeout == 0 {
            return Err("Speech request timeout cannot be 0".to_string());
        }
        if self.max_upload_bytes == 0 {
            return Err("Max upload size cannot be 0".to_string());
        }
        if let Some(locales) = &self.locales {
            if locales.is_empty() {
                return Err("Locale override cannot be empty".to_string());
            }
            if locales.iter().any(|l| l.trim().is_empty()) {
                return Err("Locale entries cannot be blank".to_string());
            }
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

fn default_speech_base_url() -> String {
    "https://www.google.com/speech-api".to_string()
}

fn default_speech_timeout() -> u64 {
    20
}

/// 25 MB, matching the upstream engine's upload cap
fn default_max_upload_bytes() -> usize {
    25 * 1024 * 1024
}
