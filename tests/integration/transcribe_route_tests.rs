//! /api/stt route tests
//!
//! Drives the multipart handler and the locale probe loop end to end
//! with scripted recognition engines.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use actix_web::{test, web, App};
    use echocode_gateway::config::Config;
    use echocode_gateway::core::generation::GenerationService;
    use echocode_gateway::core::transcription::{DEFAULT_LOCALES, TranscriptionService};
    use echocode_gateway::core::translation::TranslationService;
    use echocode_gateway::server::AppState;
    use echocode_gateway::server::routes;

    use crate::common::engines::{ScriptedRecognizer, ScriptedTranslator};
    use crate::common::fixtures;

    fn state_with_recognizer(config: Config, recognizer: ScriptedRecognizer) -> AppState {
        let generation = GenerationService::new(config.generation().clone()).unwrap();
        let transcription = TranscriptionService::new(config.speech(), Arc::new(recognizer));
        let translation = TranslationService::new(
            config.translation(),
            Arc::new(ScriptedTranslator::succeeding("unused", None)),
        );
        AppState::with_services(config, generation, transcription, translation)
    }

    fn wav_request(data: &[u8]) -> actix_web::test::TestRequest {
        test::TestRequest::post()
            .uri("/api/stt")
            .insert_header(("content-type", fixtures::multipart_content_type()))
            .set_payload(fixtures::multipart_file_body("file", "clip.wav", data))
    }

    /// Test the happy path: upload matches on the first locale and the
    /// response reports the primary language subtag.
    #[actix_web::test]
    async fn test_transcribe_returns_text_and_language() {
        let recognizer = ScriptedRecognizer::matching("hi-IN", "प्रिंट करो");
        let calls = recognizer.calls_handle();
        let state = state_with_recognizer(fixtures::gateway_config(), recognizer);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure),
        )
        .await;

        let resp = test::call_service(&app, wav_request(&fixtures::wav_clip()).to_request()).await;

        assert_eq!(resp.status().as_u16(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["text"], "प्रिंट करो");
        assert_eq!(body["language"], "hi");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    /// Test that a match partway down the list costs exactly one attempt
    /// per earlier locale.
    #[actix_web::test]
    async fn test_match_on_later_locale_counts_attempts() {
        let recognizer = ScriptedRecognizer::matching(DEFAULT_LOCALES[5], "hello there");
        let calls = recognizer.calls_handle();
        let state = state_with_recognizer(fixtures::gateway_config(), recognizer);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure),
        )
        .await;

        let resp = test::call_service(&app, wav_request(&fixtures::wav_clip()).to_request()).await;

        assert_eq!(resp.status().as_u16(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["language"], "mr");
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    /// Test that exhausting every locale is a client error with its own
    /// code, after exactly one attempt per locale.
    #[actix_web::test]
    async fn test_unrecognized_speech_is_400() {
        let recognizer = ScriptedRecognizer::never_matching();
        let calls = recognizer.calls_handle();
        let state = state_with_recognizer(fixtures::gateway_config(), recognizer);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure),
        )
        .await;

        let resp = test::call_service(&app, wav_request(&fixtures::wav_clip()).to_request()).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SPEECH_UNRECOGNIZED");
        assert_eq!(calls.load(Ordering::SeqCst), DEFAULT_LOCALES.len());
    }

    /// Test that an engine failure aborts the probe instead of burning
    /// the remaining locales, and surfaces as an upstream error.
    #[actix_web::test]
    async fn test_engine_failure_aborts_probe() {
        let recognizer = ScriptedRecognizer::failing_at(DEFAULT_LOCALES[2]);
        let calls = recognizer.calls_handle();
        let state = state_with_recognizer(fixtures::gateway_config(), recognizer);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure),
        )
        .await;

        let resp = test::call_service(&app, wav_request(&fixtures::wav_clip()).to_request()).await;

        assert_eq!(resp.status().as_u16(), 502);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[actix_web::test]
    async fn test_missing_file_field_is_400() {
        let recognizer = ScriptedRecognizer::matching("hi-IN", "unused");
        let state = state_with_recognizer(fixtures::gateway_config(), recognizer);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/stt")
            .insert_header(("content-type", fixtures::multipart_content_type()))
            .set_payload(fixtures::multipart_file_body("other", "clip.wav", b"data"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "No audio file provided");
    }

    /// Test that an undecodable upload is rejected before any engine call.
    #[actix_web::test]
    async fn test_undecodable_audio_is_400() {
        let recognizer = ScriptedRecognizer::matching("hi-IN", "unused");
        let calls = recognizer.calls_handle();
        let state = state_with_recognizer(fixtures::gateway_config(), recognizer);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure),
        )
        .await;

        let resp =
            test::call_service(&app, wav_request(b"definitely not audio").to_request()).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_AUDIO");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    /// Test that uploads over the configured cap are rejected.
    #[actix_web::test]
    async fn test_oversize_upload_is_400() {
        let mut config = fixtures::gateway_config();
        config.gateway.speech.max_upload_bytes = 1_000;

        let recognizer = ScriptedRecognizer::matching("hi-IN", "unused");
        let calls = recognizer.calls_handle();
        let state = state_with_recognizer(config, recognizer);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes::configure),
        )
        .await;

        let resp = test::call_service(&app, wav_request(&fixtures::wav_clip()).to_request()).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
