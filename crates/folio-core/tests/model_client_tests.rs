use folio_core::constants::fallback;
use folio_core::{DegradeReason, FolioError, GeminiClient, GenerateRequest, LlmClient, ModelClient, Outcome};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

fn gemini(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key")
        .with_model("gemini-test")
        .with_base_url(server.uri())
}

fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_gemini_sends_persona_and_transcript() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "systemInstruction": {"parts": [{"text": "You are MikeBot."}]},
            "contents": [{"role": "user", "parts": [{"text": "Model: hi\nUser: hello"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Hello, human.")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = gemini(&server)
        .generate(&GenerateRequest::new("You are MikeBot.", "Model: hi\nUser: hello"))
        .await
        .unwrap();

    assert_eq!(reply, "Hello, human.");
}

#[tokio::test]
async fn test_gemini_error_status_becomes_llm_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let err = gemini(&server)
        .generate(&GenerateRequest::new("persona", "User: hi"))
        .await
        .unwrap_err();

    match err {
        FolioError::Llm(message) => {
            assert!(message.contains("400"));
            assert!(message.contains("API key not valid."));
        }
        other => panic!("expected LLM error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_gemini_no_candidates_is_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let reply = gemini(&server)
        .generate(&GenerateRequest::new("persona", "User: hi"))
        .await
        .unwrap();

    assert_eq!(reply, "");
}

#[tokio::test]
async fn test_model_client_success_passes_text_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Three.js, mostly.")))
        .mount(&server)
        .await;

    let client = ModelClient::new(Box::new(gemini(&server)));
    let outcome = client.generate("persona", "User: stack?").await;

    assert_eq!(outcome, Outcome::Ok("Three.js, mostly.".to_string()));
}

#[tokio::test]
async fn test_model_client_maps_http_failure_to_transport_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let client = ModelClient::new(Box::new(gemini(&server)));
    let outcome = client.generate("persona", "User: hi").await;

    assert!(outcome.is_degraded());
    assert_eq!(outcome.text(), fallback::TRANSPORT);
    assert!(matches!(
        outcome,
        Outcome::Degraded { reason: DegradeReason::Transport(_), .. }
    ));
}

#[tokio::test]
async fn test_model_client_maps_unreachable_host_to_transport_fallback() {
    // Nothing listens on the discard port
    let backend = GeminiClient::new("test-key").with_base_url("http://127.0.0.1:9");
    let client = ModelClient::new(Box::new(backend));

    let outcome = client.generate("persona", "User: hi").await;

    assert_eq!(outcome.text(), fallback::TRANSPORT);
}

#[tokio::test]
async fn test_model_client_maps_empty_text_to_soft_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("")))
        .mount(&server)
        .await;

    let client = ModelClient::new(Box::new(gemini(&server)));
    let outcome = client.generate("persona", "User: hi").await;

    assert_eq!(
        outcome,
        Outcome::Degraded {
            reason: DegradeReason::Empty,
            fallback: fallback::EMPTY.to_string(),
        }
    );
    assert_ne!(outcome.text(), fallback::TRANSPORT);
}

#[tokio::test]
async fn test_gemini_malformed_body_is_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = gemini(&server)
        .generate(&GenerateRequest::new("persona", "User: hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, FolioError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn test_model_client_malformed_body_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ModelClient::new(Box::new(gemini(&server)));
    let outcome = client.generate("persona", "User: hi").await;

    assert_eq!(outcome.text(), fallback::TRANSPORT);
}
