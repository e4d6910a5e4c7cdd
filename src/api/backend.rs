//! Upstream text-generation backend for the endpoint.
//!
//! The handler talks to a trait object so router tests can stub the
//! upstream; the production impl posts `{model, input}` to the OpenAI
//! responses API and reads `output_text` back.

use axum::http::StatusCode;
use futures::future::BoxFuture;
use serde_json::Value;

/// Why a generation attempt failed.
#[derive(Debug)]
pub enum BackendError {
    /// The upstream service answered with a non-success status. Status and
    /// body are kept so the endpoint can relay them verbatim.
    Upstream {
        status: StatusCode,
        message: String,
        details: Value,
    },
    /// Transport or decoding failure before/after the upstream call.
    Transport(anyhow::Error),
}

pub trait GenerationBackend: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, BackendError>>;
}

/// Default upstream URL.
pub const OPENAI_RESPONSES_URL: &str = "https://api.openai.com/v1/responses";

pub struct OpenAiBackend {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_url(OPENAI_RESPONSES_URL, api_key, model)
    }

    pub fn with_url(
        url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

impl GenerationBackend for OpenAiBackend {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, BackendError>> {
        Box::pin(async move {
            let response = self
                .http
                .post(&self.url)
                .bearer_auth(&self.api_key)
                .json(&serde_json::json!({ "model": self.model, "input": prompt }))
                .send()
                .await
                .map_err(|e| BackendError::Transport(e.into()))?;

            let status = response.status();
            let body: Value = response
                .json()
                .await
                .map_err(|e| BackendError::Transport(e.into()))?;

            if !status.is_success() {
                let message = body
                    .pointer("/error/message")
                    .and_then(Value::as_str)
                    .unwrap_or("OpenAI API error")
                    .to_string();
                return Err(BackendError::Upstream {
                    status,
                    message,
                    details: body,
                });
            }

            Ok(body
                .get("output_text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string())
        })
    }
}
