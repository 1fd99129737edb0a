//! Speech client tests against a local mock server

#[cfg(test)]
mod tests {
    use echocode_gateway::core::audio::DecodedAudio;
    use echocode_gateway::core::providers::EngineError;
    use echocode_gateway::core::providers::speech::{
        HttpSpeechClient, RecognitionEngine, RecognizeOutcome,
    };
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::common::fixtures;

    fn decoded_clip() -> DecodedAudio {
        DecodedAudio::decode(&fixtures::wav_clip()).unwrap()
    }

    /// Test that one recognition attempt posts WAV bytes with the locale
    /// and key as query parameters.
    #[tokio::test]
    async fn test_recognize_match() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/recognize"))
            .and(query_param("lang", "hi-IN"))
            .and(query_param("key", "test-key"))
            .and(header("content-type", "audio/wav"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": [
                    {"alternative": [{"transcript": "likho ek loop", "confidence": 0.93}]}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpSpeechClient::new(fixtures::speech_config(&server.uri())).unwrap();
        let outcome = client.recognize(&decoded_clip(), "hi-IN").await.unwrap();

        assert_eq!(
            outcome,
            RecognizeOutcome::Match {
                text: "likho ek loop".to_string()
            }
        );
    }

    /// Test that an empty result array is a no-match, not an error.
    #[tokio::test]
    async fn test_empty_result_is_no_match() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/recognize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
            .mount(&server)
            .await;

        let client = HttpSpeechClient::new(fixtures::speech_config(&server.uri())).unwrap();
        let outcome = client.recognize(&decoded_clip(), "en-IN").await.unwrap();

        assert_eq!(outcome, RecognizeOutcome::NoMatch);
    }

    #[tokio::test]
    async fn test_http_error_is_fatal() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/recognize"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = HttpSpeechClient::new(fixtures::speech_config(&server.uri())).unwrap();
        let error = client.recognize(&decoded_clip(), "hi-IN").await.unwrap_err();

        assert!(matches!(error, EngineError::Http { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/recognize"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = HttpSpeechClient::new(fixtures::speech_config(&server.uri())).unwrap();
        let error = client.recognize(&decoded_clip(), "hi-IN").await.unwrap_err();

        assert!(matches!(error, EngineError::InvalidBody { .. }));
    }
}
