use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::registry::use_cases::register_attendee::command::RegisterAttendee;
use crate::shared::core::primitives::{new_record_id, now};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAttendeeBody {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterAttendeeBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterAttendee {
        attendee_id: new_record_id(),
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        phone: body.phone,
        organization: body.organization,
        registered_at: now(),
    };

    match state.registry.register_attendee(command).await {
        Ok(attendee) => (StatusCode::CREATED, Json(attendee)).into_response(),
        Err(e) => e.into_response(),
    }
}
