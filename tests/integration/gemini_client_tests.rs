//! Gemini client tests against a local mock server

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use echocode_gateway::core::providers::EngineError;
    use echocode_gateway::core::providers::gemini::GeminiClient;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::common::fixtures;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    /// Test that the client posts the prompt in the wire shape the API
    /// expects and joins the reply parts.
    #[tokio::test]
    async fn test_generate_content_round_trip() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{"text": "write hello world"}]}],
                "system_instruction": {"parts": [{"text": "You are a test assistant"}]},
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"parts": [{"text": "[EXPLANATION]\nPrints a greeting."}]}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(fixtures::generation_config(&server.uri())).unwrap();
        let reply = client
            .generate_content("You are a test assistant", "write hello world")
            .await
            .unwrap();

        assert_eq!(reply, "[EXPLANATION]\nPrints a greeting.");
    }

    /// Test that multiple reply parts are concatenated in order.
    #[tokio::test]
    async fn test_multi_part_replies_are_joined() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"parts": [{"text": "first "}, {"text": "second"}]}
                }]
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(fixtures::generation_config(&server.uri())).unwrap();
        let reply = client.generate_content("sys", "query").await.unwrap();

        assert_eq!(reply, "first second");
    }

    #[tokio::test]
    async fn test_http_error_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(fixtures::generation_config(&server.uri())).unwrap();
        let error = client.generate_content("sys", "query").await.unwrap_err();

        match error {
            EngineError::Http { status, body, .. } => {
                assert_eq!(status, 500);
                assert!(body.contains("backend exploded"));
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    /// Test that a 200 with a non-JSON body is surfaced as an invalid
    /// body, not a JSON parse panic.
    #[tokio::test]
    async fn test_non_json_body_is_invalid_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(fixtures::generation_config(&server.uri())).unwrap();
        let error = client.generate_content("sys", "query").await.unwrap_err();

        assert!(matches!(error, EngineError::InvalidBody { status: 200, .. }));
        assert!(error.to_string().contains("<html>gateway</html>"));
    }

    /// Test that an in-band API error object is reported as a request
    /// failure even though the HTTP status was 200.
    #[tokio::test]
    async fn test_in_band_api_error_is_detected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": {"code": 429, "message": "quota exceeded"}
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(fixtures::generation_config(&server.uri())).unwrap();
        let error = client.generate_content("sys", "query").await.unwrap_err();

        match error {
            EngineError::Request { message, .. } => {
                assert!(message.contains("quota exceeded"));
            }
            other => panic!("expected Request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates_is_no_candidates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let client = GeminiClient::new(fixtures::generation_config(&server.uri())).unwrap();
        let error = client.generate_content("sys", "query").await.unwrap_err();

        assert!(matches!(error, EngineError::NoCandidates { .. }));
    }

    /// Test that a stalled upstream trips the client deadline.
    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(5))
                    .set_body_json(json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::new(fixtures::generation_config(&server.uri())).unwrap();
        let error = client.generate_content("sys", "query").await.unwrap_err();

        assert!(matches!(error, EngineError::Timeout { .. }));
    }
}
