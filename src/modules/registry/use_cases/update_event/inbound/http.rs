use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::registry::use_cases::update_event::command::UpdateEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventBody {
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
    Path(event_id): Path<String>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateEvent {
        event_id,
        name: body.name,
        date: body.date,
        location: body.location,
        description: body.description,
    };

    match state.registry.update_event(command).await {
        Ok(event) => Json(event).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Current field values of an event, for pre-filling its edit form.
pub async fn form(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    match state.registry.event_form(&event_id).await {
        Ok(form) => Json(form).into_response(),
        Err(e) => e.into_response(),
    }
}
