use crate::pipeline::{ErrorKind, PipelineError};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// Body returned for every failed stage call
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A stage failure on its way out of the HTTP boundary
#[derive(Debug)]
pub struct ApiError(pub PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(PipelineError::InvalidBody(rejection.body_text()))
    }
}

/// Status code for an error kind. Clients only distinguish success from
/// failure, so every kind shares 500.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Configuration
        | ErrorKind::Validation
        | ErrorKind::Backend
        | ErrorKind::MalformedModelOutput => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let message = self.0.to_string();
        error!(kind = ?kind, "Stage failed: {:#}", anyhow::Error::new(self.0));
        (status_for(kind), Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::BackendError;

    #[test]
    fn test_every_kind_maps_to_500() {
        for kind in [
            ErrorKind::Configuration,
            ErrorKind::Validation,
            ErrorKind::Backend,
            ErrorKind::MalformedModelOutput,
        ] {
            assert_eq!(status_for(kind), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_response_status() {
        let err = ApiError(PipelineError::from(BackendError::TimeoutError { seconds: 30 }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "Missing required field: task".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"error": "Missing required field: task"})
        );
    }

    #[tokio::test]
    async fn test_response_body_keeps_top_level_message() {
        let err = ApiError(PipelineError::from(BackendError::ConfigurationError {
            message: "GOOGLE_API_KEY is not configured".to_string(),
        }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "Configuration error: GOOGLE_API_KEY is not configured"})
        );
    }
}
