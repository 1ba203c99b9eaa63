use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::registry::use_cases::delete_event::command::DeleteEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(params): Query<ConfirmParams>,
) -> Response {
    let command = DeleteEvent {
        event_id,
        confirmed: params.confirm,
    };
    match state.registry.delete_event(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
