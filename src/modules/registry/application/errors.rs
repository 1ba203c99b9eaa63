use crate::modules::registry::adapters::outbound::collections::CollectionError;
use crate::modules::registry::core::decision::DecideError;
use crate::shared::infrastructure::record_store::RecordStoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Domain(DecideError::MissingField(_))
            | ApplicationError::Domain(DecideError::InvalidDate(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApplicationError::Domain(DecideError::EventNotFound(_))
            | ApplicationError::Domain(DecideError::AttendeeNotFound(_)) => StatusCode::NOT_FOUND,
            ApplicationError::Domain(DecideError::NoEventSelected) => StatusCode::CONFLICT,
            ApplicationError::Domain(DecideError::NotConfirmed) => {
                StatusCode::PRECONDITION_REQUIRED
            }
            ApplicationError::Collection(CollectionError::Store(
                RecordStoreError::QuotaExceeded { .. },
            )) => StatusCode::INSUFFICIENT_STORAGE,
            ApplicationError::Collection(_) | ApplicationError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
