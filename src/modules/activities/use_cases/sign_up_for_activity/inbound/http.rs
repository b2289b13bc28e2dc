use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shared::infrastructure::http_errors::{application_error_response, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    pub message: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<SignUpParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = SignUpForActivity {
        activity_name: activity_name.into(),
        participant: params.email.into(),
    };
    let message = command.confirmation();

    match state.sign_up_handler.handle(command).await {
        Ok(()) => (StatusCode::OK, Json(SignUpResponse { message })).into_response(),
        Err(error) => application_error_response(error),
    }
}
