// End-to-end submissions against a mock Gemini endpoint.

use crystalia_cli::api::{GeminiClient, MODEL};
use crystalia_cli::config::Credential;
use crystalia_cli::oracle::{submit, Outcome, FALLBACK_ANSWER};
use crystalia_cli::prompt::Seeker;
use crystalia_cli::ui::present;
use httpmock::Method::POST;
use httpmock::MockServer;
use pretty_assertions::assert_eq;
use serde_json::json;

const ANSWER: &str = "**Simón Bolívar**... **armadillo**...";

fn endpoint() -> String {
    format!("/v1beta/models/{}:generateContent", MODEL)
}

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(server.base_url(), Credential::new("test-key").unwrap()).unwrap()
}

#[test]
fn complete_form_makes_one_call_and_renders_verbatim() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint())
            .body_contains("Ana")
            .body_contains("ingeniera")
            .body_contains("ajedrez");
        then.status(200).json_body(json!({
            "candidates": [{"content": {"parts": [{"text": ANSWER}]}}]
        }));
    });

    let outcome = submit(&client(&server), Seeker::new("Ana", "ingeniera", "ajedrez"), true);
    mock.assert_hits(1);
    assert_eq!(outcome, Outcome::Rendered(ANSWER.to_string()));
}

#[test]
fn empty_name_sends_nothing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(endpoint());
        then.status(200).json_body(json!({
            "candidates": [{"content": {"parts": [{"text": ANSWER}]}}]
        }));
    });

    let outcome = submit(&client(&server), Seeker::new("", "ingeniera", "ajedrez"), true);
    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(mock.hits(), 0);
}

#[test]
fn server_error_shows_fallback_without_retry() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(endpoint());
        then.status(500)
            .json_body(json!({"error": {"code": 500, "message": "Internal error encountered."}}));
    });

    let outcome = submit(&client(&server), Seeker::new("Ana", "ingeniera", "ajedrez"), true);
    mock.assert_hits(1);

    let Outcome::ErrorRendered { cause, fallback } = &outcome else {
        panic!("unexpected outcome: {:?}", outcome);
    };
    assert!(cause.contains("Internal error encountered."));
    assert_eq!(fallback, FALLBACK_ANSWER);

    let shown = present(&outcome, false);
    assert!(shown.contains("Sorry, the spirits cannot answer right now. Error:"));
    assert!(shown.ends_with(FALLBACK_ANSWER));
}
