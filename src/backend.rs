//! LLM backend abstraction.
//!
//! The pipeline talks to an opaque text-generation capability through the
//! [`TextGenerator`] trait: one asynchronous, fallible method. The shipped
//! implementation is [`GeminiBackend`] for the Google Generative Language
//! `generateContent` API; tests inject stubs instead.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MAX_ERROR_BODY_CHARS: usize = 256;

/// Errors returned by LLM backends.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream responded with a non-success status.
    #[error("backend returned non-success status {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, truncated for logging
        body: String,
    },

    /// Response did not match the expected schema.
    #[error("failed to parse backend response: {0}")]
    Parse(String),

    /// The backend answered successfully but produced no text.
    #[error("backend reply contained no text")]
    NoText,
}

/// Opaque text-generation capability.
///
/// The pipeline passes exactly two segments per call (the system
/// instruction followed by the user instruction) and reads a single text
/// reply. Implementations must be `Send + Sync` so a pipeline can be shared
/// across concurrent invocations.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a reply for the given instruction segments.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport, status, parse or
    /// empty-reply failure.
    async fn generate(&self, segments: &[String]) -> Result<String, BackendError>;
}

// ---------------------------------------------------------------------------
// Wire types (pub for unit testing without network)
// ---------------------------------------------------------------------------

/// `generateContent` request body.
#[doc(hidden)]
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    /// Request contents; a single entry carrying all instruction segments.
    pub contents: Vec<Content>,
}

/// A content entry: an ordered list of text parts.
#[doc(hidden)]
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    /// Text parts in order.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single text part.
#[doc(hidden)]
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    /// The text payload.
    pub text: String,
}

/// `generateContent` response body.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates; the first one carries the reply.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A generated candidate.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// Candidate content.
    pub content: Option<Content>,
}

/// Builds a `generateContent` request carrying the segments in order.
#[doc(hidden)]
#[must_use]
pub fn build_request(segments: &[String]) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: segments
                .iter()
                .map(|text| Part { text: text.clone() })
                .collect(),
        }],
    }
}

/// Parses a `generateContent` response body into the reply text.
///
/// # Errors
///
/// Returns `BackendError::Parse` if the body cannot be deserialized and
/// `BackendError::NoText` if no candidate carries non-empty text.
#[doc(hidden)]
pub fn parse_response(body: &str) -> Result<String, BackendError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;

    let reply: String = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect()
        })
        .unwrap_or_default();

    if reply.trim().is_empty() {
        return Err(BackendError::NoText);
    }
    Ok(reply)
}

/// Checks an HTTP response status and returns the body or a structured error.
async fn check_http_response(response: reqwest::Response) -> Result<String, BackendError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(BackendError::HttpStatus {
            status: status.as_u16(),
            body: truncate_error_body(&body),
        });
    }
    Ok(body)
}

fn truncate_error_body(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > MAX_ERROR_BODY_CHARS {
        let shortened: String = collapsed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        return format!("{shortened}...[truncated]");
    }
    collapsed
}

// ---------------------------------------------------------------------------
// Gemini backend
// ---------------------------------------------------------------------------

/// Google Generative Language `generateContent` backend.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiBackend {
    /// Creates a backend for the given credential and model identifier.
    #[must_use]
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiBackend {
    async fn generate(&self, segments: &[String]) -> Result<String, BackendError> {
        let request = build_request(segments);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let body = check_http_response(response).await?;
        parse_response(&body)
    }
}
