// crates/post-search/src/infrastructure/api/http/api_error.rs

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared_kernel::errors::{AppError, DomainError, ErrorCode};

/// `AppError` rendu en JSON avec le statut HTTP de son code
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(AppError::from(error))
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

// Corps illisible : même format d'erreur que les refus métier
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::new(ErrorCode::ValidationFailed, rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!("❌ Search request failed: {}", self.0);
        }
        (status, Json(self.0)).into_response()
    }
}
