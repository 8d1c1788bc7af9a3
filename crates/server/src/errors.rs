use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use service::errors::ServiceError;
use tracing::error;

/// Error returned by handlers, rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "request failed");
        }
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Model(ModelError::Validation(msg)) => Self::bad_request(msg),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ServiceError::Upstream(msg) => {
                Self::new(StatusCode::BAD_GATEWAY, format!("failed to load students: {msg}"))
            }
        }
    }
}
