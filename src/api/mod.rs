//! The generation endpoint: `POST /api/generate`.
//!
//! Stateless per request: validate, build the prompt, call the upstream
//! backend, relay the result. Upstream failures keep their status and
//! body; everything unexpected collapses to a generic 500.

pub mod backend;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::generate::{prompt, GenerateRequest};

pub use backend::{BackendError, GenerationBackend, OpenAiBackend, OPENAI_RESPONSES_URL};

#[derive(Clone)]
pub struct ApiState {
    backend: Arc<dyn GenerationBackend>,
}

impl ApiState {
    pub fn new(backend: impl GenerationBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}

/// Build the endpoint router with permissive CORS.
pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/generate", any(generate))
        .layer(cors)
        .with_state(state)
}

/// JSON error reply, optionally carrying upstream details.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
    details: Option<Value>,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: "Use POST".to_string(),
            details: None,
        }
    }

    fn upstream(status: StatusCode, message: String, details: Value) -> Self {
        Self {
            status,
            message,
            details: Some(details),
        }
    }

    fn server_error(details: impl ToString) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Server error".to_string(),
            details: Some(Value::String(details.to_string())),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut payload = json!({ "error": self.message });
        if let Some(details) = self.details {
            payload["details"] = details;
        }
        (self.status, Json(payload)).into_response()
    }
}

/// Single entrypoint for every method on `/api/generate`.
///
/// The body is decoded leniently: anything unparseable counts as an empty
/// request and fails topic validation.
async fn generate(method: Method, State(state): State<ApiState>, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        // Non-preflight OPTIONS; preflight is answered by the CORS layer
        return StatusCode::OK.into_response();
    }
    if method != Method::POST {
        return ApiError::method_not_allowed().into_response();
    }

    let req: GenerateRequest = serde_json::from_slice(&body).unwrap_or_default();
    if req.topic.is_empty() {
        return ApiError::bad_request("Missing topic").into_response();
    }

    let prompt = prompt::build_prompt(&req);
    match state.backend.generate(&prompt).await {
        Ok(text) => (StatusCode::OK, Json(json!({ "text": text }))).into_response(),
        Err(BackendError::Upstream {
            status,
            message,
            details,
        }) => ApiError::upstream(status, message, details).into_response(),
        Err(BackendError::Transport(e)) => {
            error!("Generation request failed: {e:#}");
            ApiError::server_error(format!("{e:#}")).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use futures::future::BoxFuture;
    use tower::ServiceExt;

    use super::*;

    enum StubReply {
        Text(String),
        Upstream(StatusCode, String, Value),
        Transport,
    }

    struct StubBackend {
        reply: StubReply,
        seen_prompt: Mutex<Option<String>>,
    }

    impl StubBackend {
        fn text(text: &str) -> Self {
            Self {
                reply: StubReply::Text(text.to_string()),
                seen_prompt: Mutex::new(None),
            }
        }
    }

    impl GenerationBackend for StubBackend {
        fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, BackendError>> {
            Box::pin(async move {
                *self.seen_prompt.lock().unwrap() = Some(prompt.to_string());
                match &self.reply {
                    StubReply::Text(text) => Ok(text.clone()),
                    StubReply::Upstream(status, message, details) => Err(BackendError::Upstream {
                        status: *status,
                        message: message.clone(),
                        details: details.clone(),
                    }),
                    StubReply::Transport => {
                        Err(BackendError::Transport(anyhow::anyhow!("connection refused")))
                    }
                }
            })
        }
    }

    fn post(body: &str) -> Request<Body> {
        Request::post("/api/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn rejects_non_post_methods() {
        let router = router(ApiState::new(StubBackend::text("x")));
        let response = router
            .oneshot(Request::get("/api/generate").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Use POST");
    }

    #[tokio::test]
    async fn missing_topic_is_bad_request() {
        let router = router(ApiState::new(StubBackend::text("x")));
        let response = router.oneshot(post("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Missing topic");
    }

    #[tokio::test]
    async fn unparseable_body_is_bad_request() {
        let router = router(ApiState::new(StubBackend::text("x")));
        let response = router.oneshot(post("not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn relays_generated_text() {
        let backend = StubBackend::text("la fiche complète");
        let router = router(ApiState::new(backend));
        let response = router
            .oneshot(post(r#"{"topic":"Rome antique"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["text"], "la fiche complète");
    }

    #[tokio::test]
    async fn prompt_embeds_topic_and_defaults() {
        let backend = Arc::new(StubBackend::text("ok"));
        let state = ApiState {
            backend: backend.clone(),
        };
        let response = router(state)
            .oneshot(post(r#"{"topic":"Rome antique"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let prompt = backend.seen_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("THEME: Rome antique"));
        assert!(prompt.contains("NIVEAU: Lycée"));
        assert!(prompt.contains("FORMAT: Fiche + Quiz"));
    }

    #[tokio::test]
    async fn relays_upstream_status_and_details() {
        let details = json!({"error": {"message": "quota exceeded", "code": 429}});
        let backend = StubBackend {
            reply: StubReply::Upstream(
                StatusCode::TOO_MANY_REQUESTS,
                "quota exceeded".to_string(),
                details.clone(),
            ),
            seen_prompt: Mutex::new(None),
        };
        let router = router(ApiState::new(backend));
        let response = router.oneshot(post(r#"{"topic":"t"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = json_body(response).await;
        assert_eq!(body["error"], "quota exceeded");
        assert_eq!(body["details"], details);
    }

    #[tokio::test]
    async fn transport_failure_is_server_error() {
        let backend = StubBackend {
            reply: StubReply::Transport,
            seen_prompt: Mutex::new(None),
        };
        let router = router(ApiState::new(backend));
        let response = router.oneshot(post(r#"{"topic":"t"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Server error");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let router = router(ApiState::new(StubBackend::text("x")));
        let mut request = post(r#"{"topic":"t"}"#);
        request
            .headers_mut()
            .insert(header::ORIGIN, "https://example.test".parse().unwrap());
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn answers_plain_options() {
        let router = router(ApiState::new(StubBackend::text("x")));
        let response = router
            .oneshot(
                Request::options("/api/generate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
