//! Speech transcription
//!
//! The recognition upstream takes one locale per request and we never
//! know in advance which language the user spoke, so transcription is a
//! probe loop: decode the upload once, then try locales in priority
//! order until one matches. Recognition cost scales with the number of
//! attempts, which is why the decode happens outside the loop and why
//! the loop stops at the first match.

mod locales;

pub use locales::{DEFAULT_LOCALES, primary_subtag};

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::models::SpeechConfig;
use crate::core::audio::DecodedAudio;
use crate::core::providers::speech::{RecognitionEngine, RecognizeOutcome};
use crate::utils::error::{GatewayError, Result};

/// A recognized utterance and the language it was spoken in
#[derive(Debug, Clone, PartialEq)]
pub struct Transcription {
    pub text: String,
    /// Primary subtag of the matching locale ("hi", not "hi-IN")
    pub language: String,
}

/// Runs the locale probe loop over a recognition engine
pub struct TranscriptionService {
    engine: Arc<dyn RecognitionEngine>,
    locales: Vec<String>,
}

impl TranscriptionService {
    /// Build a service probing the configured locales, or the built-in
    /// list when the config does not override them
    pub fn new(config: &SpeechConfig, engine: Arc<dyn RecognitionEngine>) -> Self {
        let locales = match &config.locales {
            Some(overridden) => overridden.clone(),
            None => DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect(),
        };
        Self { engine, locales }
    }

    /// Transcribe an uploaded audio clip
    ///
    /// A `NoMatch` from the engine moves on to the next locale; a
    /// transport or upstream failure aborts the request, since it would
    /// hit every remaining attempt too.
    pub async fn transcribe(&self, data: &[u8]) -> Result<Transcription> {
        let audio = DecodedAudio::decode(data)?;
        debug!(
            duration_secs = audio.duration_secs(),
            locales = self.locales.len(),
            "Audio decoded, starting locale probe"
        );

        for locale in &self.locales {
            match self.engine.recognize(&audio, locale).await? {
                RecognizeOutcome::Match { text } => {
                    let language = primary_subtag(locale).to_string();
                    info!(%locale, %language, "Speech recognized");
                    return Ok(Transcription { text, language });
                }
                RecognizeOutcome::NoMatch => {
                    debug!(%locale, "No match, trying next locale");
                }
            }
        }

        Err(GatewayError::unrecognized())
    }
}
