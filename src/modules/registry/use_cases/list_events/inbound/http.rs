use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

/// Every event in insertion order, each with its registered attendee count.
pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.registry.event_summaries().await)
}
