//! HTTP client for the generation endpoint.

use anyhow::Context as _;
use serde::Deserialize;

use super::GenerateRequest;

/// Endpoint URL used when `REVISE_API_URL` is not set.
pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:3900/api/generate";

/// Thin client over the endpoint's JSON contract.
#[derive(Debug, Clone)]
pub struct EndpointClient {
    http: reqwest::Client,
    url: String,
}

/// Reply body: `{text}` on success, `{error}` on failure.
#[derive(Debug, Deserialize)]
struct EndpointReply {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl EndpointClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Endpoint URL from `REVISE_API_URL`, defaulting to the local server.
    pub fn from_env() -> Self {
        let url =
            std::env::var("REVISE_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT_URL.to_string());
        Self::new(url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request generated content for `req`.
    ///
    /// Non-success statuses surface the endpoint's `error` message; a
    /// missing `text` field decodes as empty content.
    pub async fn generate(&self, req: &GenerateRequest) -> anyhow::Result<String> {
        let response = self
            .http
            .post(&self.url)
            .json(req)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.url))?;

        let status = response.status();
        let reply: EndpointReply = response
            .json()
            .await
            .context("Invalid endpoint reply")?;

        if !status.is_success() {
            let message = reply
                .error
                .unwrap_or_else(|| format!("Erreur HTTP {status}"));
            anyhow::bail!(message);
        }
        Ok(reply.text.unwrap_or_default())
    }
}
