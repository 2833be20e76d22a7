use crystalia_cli::api::{GeminiClient, ModelError, TextModel, MODEL};
use crystalia_cli::config::Credential;
use httpmock::Method::POST;
use httpmock::MockServer;
use pretty_assertions::assert_eq;
use serde_json::json;

fn endpoint() -> String {
    format!("/v1beta/models/{}:generateContent", MODEL)
}

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(server.base_url(), Credential::new("test-key").unwrap()).unwrap()
}

#[test]
fn sends_prompt_with_key_and_returns_text() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint())
            .header("x-goog-api-key", "test-key")
            .json_body(json!({"contents": [{"parts": [{"text": "hola oráculo"}]}]}));
        then.status(200).json_body(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "**Simón Bolívar**... **armadillo**..."}]},
                "finishReason": "STOP"
            }]
        }));
    });

    let text = client(&server).generate("hola oráculo").unwrap();
    mock.assert();
    assert_eq!(text, "**Simón Bolívar**... **armadillo**...");
}

#[test]
fn api_error_message_is_extracted() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(endpoint());
        then.status(400).json_body(json!({
            "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
        }));
    });

    let err = client(&server).generate("x").unwrap_err();
    mock.assert_hits(1);
    match err {
        ModelError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid.");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn non_json_error_body_is_kept_raw() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(endpoint());
        then.status(503).body("upstream unavailable");
    });

    let err = client(&server).generate("x").unwrap_err();
    assert_eq!(err.to_string(), "API error 503: upstream unavailable");
}

#[test]
fn garbage_success_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(endpoint());
        then.status(200).body("not json");
    });

    let err = client(&server).generate("x").unwrap_err();
    assert!(matches!(err, ModelError::Decode(_)));
}

#[test]
fn blocked_prompt_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(endpoint());
        then.status(200)
            .json_body(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
    });

    let err = client(&server).generate("x").unwrap_err();
    assert_eq!(err.to_string(), "prompt blocked: SAFETY");
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Port 9 (discard) on localhost is expected to refuse connections.
    let client = GeminiClient::new("http://127.0.0.1:9", Credential::new("k").unwrap()).unwrap();
    let err = client.generate("x").unwrap_err();
    assert!(matches!(err, ModelError::Transport(_)));
}
