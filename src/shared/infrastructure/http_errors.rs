use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::use_cases::errors::ApplicationError;

/// Error body shared by every HTTP endpoint: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn application_error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Domain(DecideError::ActivityNotFound) => {
            error_response(StatusCode::NOT_FOUND, error.to_string())
        }
        ApplicationError::Domain(reason) => error_response(StatusCode::BAD_REQUEST, reason.to_string()),
        ApplicationError::Store(store_error) => {
            tracing::error!(error = %store_error, "activity store failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
