//! Machine-translation engine
//!
//! The trait seam mirrors the recognition engine's: the translation
//! service owns retry policy, the engine owns one upstream call.

mod client;

pub use client::HttpTranslateClient;

use async_trait::async_trait;

use crate::core::providers::EngineError;

/// A single successful translation from the engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineTranslation {
    /// Translated text
    pub text: String,
    /// Source language the engine detected, when it reports one
    pub detected_source: Option<String>,
}

/// A source/target locale translator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Translate `text` from `source` (or the auto-detect sentinel) into `target`
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<EngineTranslation, EngineError>;
}
