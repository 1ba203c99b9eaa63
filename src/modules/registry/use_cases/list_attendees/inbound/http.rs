use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

/// Attendees of the selected event matching the current search term.
pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.registry.attendee_list().await)
}
