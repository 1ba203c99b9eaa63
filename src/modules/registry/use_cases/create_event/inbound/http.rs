use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::registry::use_cases::create_event::command::CreateEvent;
use crate::shared::core::primitives::{new_record_id, now};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateEvent {
        event_id: new_record_id(),
        name: body.name,
        date: body.date,
        location: body.location,
        description: body.description,
        created_at: now(),
    };

    match state.registry.create_event(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => e.into_response(),
    }
}
