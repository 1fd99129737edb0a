//! Configuration management for the gateway
//!
//! This module handles loading, validation, and management of all gateway configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Overlay environment variables onto the loaded configuration
    ///
    /// Recognized variables: `GEMINI_API_KEY` / `GOOGLE_API_KEY`,
    /// `SPEECH_API_KEY`, `GATEWAY_HOST`, `GATEWAY_PORT`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) =
            std::env::var("GEMINI_API_KEY").or_else(|_| std::env::var("GOOGLE_API_KEY"))
        {
            self.gateway.generation.api_key = key;
        }

        if let Ok(key) = std::env::var("SPEECH_API_KEY") {
            self.gateway.speech.api_key = key;
        }

        if let Ok(host) = std::env::var("GATEWAY_HOST") {
            self.gateway.server.host = host;
        }

        if let Ok(port) = std::env::var("GATEWAY_PORT") {
            match port.parse() {
                Ok(port) => self.gateway.server.port = port,
                Err(_) => warn!("Ignoring invalid GATEWAY_PORT value: {}", port),
            }
        }
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get generation configuration
    pub fn generation(&self) -> &GenerationConfig {
        &self.gateway.generation
    }

    /// Get speech configuration
    pub fn speech(&self) -> &SpeechConfig {
        &self.gateway.speech
    }

    /// Get translation configuration
    pub fn translation(&self) -> &TranslationConfig {
        &self.gateway.translation
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway.validate().map_err(GatewayError::Config)?;

        if self.gateway.generation.api_key.is_empty() {
            warn!("No generation API key configured; /api/generate requests will fail upstream");
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
