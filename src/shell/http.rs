use axum::{
    Router,
    routing::{delete, get, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::registry::use_cases::create_event::inbound::http as create_event_http;
use crate::modules::registry::use_cases::delete_attendee::inbound::http as delete_attendee_http;
use crate::modules::registry::use_cases::delete_event::inbound::http as delete_event_http;
use crate::modules::registry::use_cases::list_attendees::inbound::http as list_attendees_http;
use crate::modules::registry::use_cases::list_events::inbound::http as list_events_http;
use crate::modules::registry::use_cases::register_attendee::inbound::http as register_attendee_http;
use crate::modules::registry::use_cases::select_event::inbound::http as select_event_http;
use crate::modules::registry::use_cases::update_event::inbound::http as update_event_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/events",
            get(list_events_http::handle).post(create_event_http::handle),
        )
        .route(
            "/events/{event_id}",
            put(update_event_http::handle).delete(delete_event_http::handle),
        )
        .route("/events/{event_id}/form", get(update_event_http::form))
        .route(
            "/selection",
            get(select_event_http::show)
                .put(select_event_http::select)
                .delete(select_event_http::clear),
        )
        .route("/search", put(select_event_http::search))
        .route(
            "/attendees",
            get(list_attendees_http::handle).post(register_attendee_http::handle),
        )
        .route(
            "/attendees/{attendee_id}",
            delete(delete_attendee_http::handle),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
