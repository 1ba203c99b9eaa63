use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::registry::use_cases::select_event::command::SelectionCommand;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectEventBody {
    pub event_id: String,
}

#[derive(Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub term: String,
}

pub async fn show(State(state): State<AppState>) -> Response {
    Json(state.registry.selection().await).into_response()
}

pub async fn select(
    State(state): State<AppState>,
    body: Result<Json<SelectEventBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    apply(
        &state,
        SelectionCommand::Select {
            event_id: body.event_id,
        },
    )
    .await
}

pub async fn clear(State(state): State<AppState>) -> Response {
    apply(&state, SelectionCommand::Clear).await
}

pub async fn search(
    State(state): State<AppState>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    apply(&state, SelectionCommand::Search { term: body.term }).await
}

async fn apply(state: &AppState, command: SelectionCommand) -> Response {
    match state.registry.select(command).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => e.into_response(),
    }
}
