// Model client: a small blocking HTTP client for the Gemini
// `generateContent` endpoint. One call per submission, no retry, no
// generation parameters. The request timeout is reqwest's default.

use crate::config::{Credential, Settings};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed model identifier.
pub const MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Anything that can turn a prompt into text. `GeminiClient` is the real
/// one; tests use stubs.
pub trait TextModel {
    fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("prompt blocked: {0}")]
    Blocked(String),
    #[error("the model returned no text")]
    Empty,
}

/// Client holding the reqwest blocking client, the endpoint base URL and the
/// API key. The key is set once at construction and never changes.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    credential: Credential,
}

/// Request body for `generateContent`.
#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    parts: Vec<OutPart<'a>>,
}

#[derive(Serialize, Debug)]
struct OutPart<'a> {
    text: &'a str,
}

/// The fields of the response we care about. Everything else is ignored.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<InPart>,
}

#[derive(Deserialize, Debug)]
struct InPart {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

impl GeminiClient {
    /// Create a client for `base_url` (no trailing path) authenticated with
    /// `credential`.
    pub fn new(base_url: impl Into<String>, credential: Credential) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(GeminiClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential,
        })
    }

    /// Create a client using the endpoint from `settings`.
    pub fn from_settings(settings: &Settings, credential: Credential) -> Result<Self> {
        Self::new(settings.api_base_url.clone(), credential)
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, MODEL)
    }
}

impl TextModel for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![OutPart { text: prompt }],
            }],
        };

        tracing::debug!(model = MODEL, prompt_len = prompt.len(), "sending generateContent");
        let res = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.credential.expose())
            .json(&body)
            .send()
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        let status = res.status();
        let txt = res
            .text()
            .map_err(|e| ModelError::Transport(e.to_string()))?;
        tracing::debug!(%status, "generateContent returned");

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&txt)
                .map(|env| env.error.message)
                .unwrap_or(txt);
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&txt).map_err(|e| ModelError::Decode(e.to_string()))?;
        extract_text(parsed)
    }
}

/// Join the text parts of the first candidate.
fn extract_text(resp: GenerateResponse) -> Result<String, ModelError> {
    if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ModelError::Blocked(reason));
    }
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.is_empty() {
        Err(ModelError::Empty)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn joins_parts_of_first_candidate() {
        let resp = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hola, "},{"text":"soy CrystalIA"}],"role":"model"}},
                {"content":{"parts":[{"text":"ignored"}]}}]}"#,
        );
        assert_eq!(extract_text(resp).unwrap(), "Hola, soy CrystalIA");
    }

    #[test]
    fn block_reason_is_an_error() {
        let resp = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        assert!(matches!(extract_text(resp), Err(ModelError::Blocked(r)) if r == "SAFETY"));
    }

    #[test]
    fn no_candidates_is_empty() {
        assert!(matches!(extract_text(parse("{}")), Err(ModelError::Empty)));
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![OutPart { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"contents":[{"parts":[{"text":"hi"}]}]})
        );
    }
}
