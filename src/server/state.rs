//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::Config;
use crate::core::generation::GenerationService;
use crate::core::providers::speech::HttpSpeechClient;
use crate::core::providers::translate::HttpTranslateClient;
use crate::core::transcription::TranscriptionService;
use crate::core::translation::TranslationService;
use crate::utils::error::Result;

/// HTTP server state shared across handlers
///
/// Every service is constructed once here and shared read-only; handlers
/// never build clients of their own.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    pub generation: Arc<GenerationService>,
    pub transcription: Arc<TranscriptionService>,
    pub translation: Arc<TranslationService>,
}

impl AppState {
    /// Wire the real upstream clients into their services
    pub fn new(config: Config) -> Result<Self> {
        let generation = GenerationService::new(config.generation().clone())?;

        let recognizer = Arc::new(HttpSpeechClient::new(config.speech().clone())?);
        let transcription = TranscriptionService::new(config.speech(), recognizer);

        let translator = Arc::new(HttpTranslateClient::new(config.translation().clone())?);
        let translation = TranslationService::new(config.translation(), translator);

        Ok(Self {
            config: Arc::new(config),
            generation: Arc::new(generation),
            transcription: Arc::new(transcription),
            translation: Arc::new(translation),
        })
    }

    /// Assemble state from prebuilt services
    ///
    /// Integration tests use this to swap in scripted engines; production
    /// code goes through [`AppState::new`].
    pub fn with_services(
        config: Config,
        generation: GenerationService,
        transcription: TranscriptionService,
        translation: TranslationService,
    ) -> Self {
        Self {
            config: Arc::new(config),
            generation: Arc::new(generation),
            transcription: Arc::new(transcription),
            translation: Arc::new(translation),
        }
    }
}
