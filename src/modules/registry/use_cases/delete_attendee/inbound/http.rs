use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::registry::use_cases::delete_attendee::command::DeleteAttendee;
use crate::modules::registry::use_cases::delete_event::inbound::http::ConfirmParams;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(attendee_id): Path<String>,
    Query(params): Query<ConfirmParams>,
) -> Response {
    let command = DeleteAttendee {
        attendee_id,
        confirmed: params.confirm,
    };
    match state.registry.delete_attendee(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
