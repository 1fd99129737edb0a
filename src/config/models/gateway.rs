//! Main gateway configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Code-generation upstream configuration
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Speech-recognition upstream configuration
    #[serde(default)]
    pub speech: SpeechConfig,
    /// Translation upstream configuration
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl GatewayConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.server
            .cors
            .validate()
            .map_err(|e| format!("CORS config error: {}", e))?;
        self.generation
            .validate()
            .map_err(|e| format!("Generation config error: {}", e))?;
        self.speech
            .validate()
            .map_err(|e| format!("Speech config error: {}", e))?;
        self.translation
            .validate()
            .map_err(|e| format!("Translation config error: {}", e))?;
        Ok(())
    }
}
