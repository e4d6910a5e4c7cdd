//! Talking to the generation endpoint.
//!
//! The core only knows the endpoint's JSON contract:
//! `{topic, level?, format?, details?}` in, `{text}` or `{error}` out.
//! The endpoint itself lives in [`crate::api`] and can be hosted anywhere.

pub mod client;
pub mod manager;
pub mod prompt;

use serde::{Deserialize, Serialize};

pub use client::EndpointClient;
pub use manager::{GenerationManager, GenerationUpdate};

/// Request body of the generation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GenerateRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }
}
