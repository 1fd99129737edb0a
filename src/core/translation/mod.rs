//! Text translation
//!
//! A thin retry policy over the translation engine. Auto-detection is
//! unreliable on short transliterated input, so a failed auto-detect
//! attempt gets exactly one retry with the configured fallback source.
//! An explicit source never retries: the caller named the language, and
//! an answer in a different one would be wrong, not helpful.

use std::sync::Arc;

use tracing::warn;

use crate::config::models::{AUTO_SOURCE, TranslationConfig};
use crate::core::providers::translate::TranslationEngine;
use crate::utils::error::{GatewayError, Result};

/// A completed translation
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    /// Engine-detected source when reported, the requested source
    /// otherwise. A fallback retry always reports the fallback locale,
    /// because detection never ran on that attempt.
    pub detected_language: String,
}

/// Owns the auto-detect retry policy over a translation engine
pub struct TranslationService {
    engine: Arc<dyn TranslationEngine>,
    fallback_source: String,
}

impl TranslationService {
    pub fn new(config: &TranslationConfig, engine: Arc<dyn TranslationEngine>) -> Self {
        Self {
            engine,
            fallback_source: config.fallback_source.clone(),
        }
    }

    /// Translate `text` into `target`
    ///
    /// Makes at most two upstream calls: the requested attempt, plus the
    /// fallback retry when the request asked for auto-detection.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Result<Translation> {
        match self.engine.translate(text, source, target).await {
            Ok(done) => Ok(Translation {
                text: done.text,
                detected_language: done
                    .detected_source
                    .unwrap_or_else(|| source.to_string()),
            }),
            Err(error) if source == AUTO_SOURCE => {
                warn!(
                    %error,
                    fallback = %self.fallback_source,
                    "Auto-detect translation failed, retrying with fallback source"
                );
                self.retry_with_fallback(text, target).await
            }
            Err(error) => Err(GatewayError::Translation(error.to_string())),
        }
    }

    async fn retry_with_fallback(&self, text: &str, target: &str) -> Result<Translation> {
        match self
            .engine
            .translate(text, &self.fallback_source, target)
            .await
        {
            Ok(done) => Ok(Translation {
                text: done.text,
                detected_language: self.fallback_source.clone(),
            }),
            Err(error) => Err(GatewayError::TranslationFallback(error.to_string())),
        }
    }
}
