//! HTTP boundary for the engine.
//!
//! Routes:
//! - `POST /recommend` with a `RecommendationRequest` JSON body
//!   → 200 `{"suggestions": [...]}` or 400 `{"error": "..."}`
//! - `GET /health` → 200 `{"status": "ok", "tools": n}`
//!
//! Every non-2xx response, including oversized bodies, unknown paths and
//! wrong methods, carries an `ErrorBody`.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use sources::{InputError, RecommendationRequest};
use tracing::{error, info, warn};

use crate::engine::{RecommendationEngine, RecommendationResult};

type EngineState = Arc<RecommendationEngine>;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Error payload for every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub tools: usize,
}

/// Failures a handler can report
#[derive(Debug)]
pub enum ApiError {
    Input(InputError),
    /// The body could not be read (too large, broken stream)
    Unreadable { status: StatusCode, message: String },
    NotFound,
    MethodNotAllowed,
    /// Anything unexpected; details are logged, never returned
    Internal,
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        ApiError::Input(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Unreadable {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Input(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Unreadable { status, message } => (status, message),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method not allowed".to_string(),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Build the router over a shared engine
pub fn router(engine: EngineState) -> Router {
    Router::new()
        .route("/recommend", post(recommend).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(engine)
}

async fn recommend(
    State(engine): State<EngineState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RecommendationResult>, ApiError> {
    let body = body.map_err(|rejection| {
        warn!("Unreadable request body: {}", rejection.body_text());
        rejection
    })?;
    let body = std::str::from_utf8(&body).map_err(|e| InputError::Malformed(e.to_string()))?;

    let request = RecommendationRequest::from_json(body).map_err(|e| {
        warn!("Rejected request: {}", e);
        e
    })?;

    let result = guarded(|| engine.recommend(&request))?;

    info!("Returning {} suggestions", result.suggestions.len());
    Ok(Json(result))
}

/// Run `f`, turning a panic into `ApiError::Internal`
fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, ApiError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|_| {
        error!("Engine panicked while handling request");
        ApiError::Internal
    })
}

async fn health(State(engine): State<EngineState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        tools: engine.catalog().len(),
    })
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use catalog::ToolCatalog;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let catalog = Arc::new(ToolCatalog::builtin().unwrap());
        router(Arc::new(RecommendationEngine::new(catalog)))
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = test_router().oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_recommend(body: impl Into<Body>) -> (StatusCode, serde_json::Value) {
        send(
            Request::builder()
                .method("POST")
                .uri("/recommend")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
    }

    async fn error_body(response: Response) -> ErrorBody {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_recommend_ok() {
        let (status, body) = post_recommend(r#"{"need": "I need an email tool"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({ "suggestions": ["mailchimp", "sendgrid", "convertkit"] })
        );
    }

    #[tokio::test]
    async fn test_recommend_empty_object_gets_fallback() {
        let (status, body) = post_recommend("{}").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({ "suggestions": ["notion", "canva", "zapier", "slack"] })
        );
    }

    #[tokio::test]
    async fn test_recommend_bad_field_is_400() {
        let (status, body) = post_recommend(r#"{"need": {"text": "email"}}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "field `need` must be a string, got an object");
    }

    #[tokio::test]
    async fn test_recommend_malformed_json_is_400() {
        let (status, body) = post_recommend("need=email").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("request body is not valid JSON"));
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.tools, 21);
    }

    #[tokio::test]
    async fn test_oversized_body_is_413_with_error_body() {
        let need = "a".repeat(MAX_BODY_BYTES);
        let (status, body) = post_recommend(format!(r#"{{"need": "{}"}}"#, need)).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body["error"].is_string(), "body: {body}");
    }

    #[tokio::test]
    async fn test_wrong_method_is_405_with_error_body() {
        let (status, body) = send(
            Request::builder()
                .method("GET")
                .uri("/recommend")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, serde_json::json!({ "error": "method not allowed" }));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_with_error_body() {
        let (status, body) = send(
            Request::builder()
                .uri("/recommendations")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "not found" }));
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let err = guarded(|| -> usize { panic!("index 99 out of range for catalog") }).unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error_body(response).await,
            ErrorBody {
                error: "internal error".to_string()
            }
        );
    }

    #[test]
    fn test_guarded_passes_value_through() {
        assert_eq!(guarded(|| 7).unwrap(), 7);
    }
}
