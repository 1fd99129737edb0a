//! Speech-recognition engine
//!
//! The engine accepts one locale per call, so multi-language support is
//! the caller's job (see the transcription service's locale loop). The
//! trait seam exists so tests can drive the loop with scripted engines.

mod client;

pub use client::HttpSpeechClient;

use async_trait::async_trait;

use crate::core::audio::DecodedAudio;
use crate::core::providers::EngineError;

/// Per-attempt recognition outcome
///
/// `NoMatch` is the expected common case while probing locales and keeps
/// the loop going; transport and upstream failures are `Err` and abort it.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognizeOutcome {
    /// The engine confidently recognized speech in the attempted locale
    Match { text: String },
    /// Nothing recognizable in the attempted locale
    NoMatch,
}

/// A locale-aware speech recognizer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecognitionEngine: Send + Sync {
    /// Attempt recognition of `audio` in a single locale
    async fn recognize(
        &self,
        audio: &DecodedAudio,
        locale: &str,
    ) -> Result<RecognizeOutcome, EngineError>;
}
