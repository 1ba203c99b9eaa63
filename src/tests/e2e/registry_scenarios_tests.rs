use crate::modules::registry::adapters::outbound::collections::{
    ATTENDEES_KEY, EVENTS_KEY, load_collection,
};
use crate::modules::registry::core::records::{Attendee, Event};
use crate::shared::infrastructure::record_store::RecordStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::app::{body_json, empty_request, json_request};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

const LAUNCH_DAY: &str =
    r#"{"name":"Launch Day","date":"2024-05-01","location":"Pad 1","description":""}"#;
const ADA: &str = r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@x.com"}"#;

async fn boot() -> (Arc<InMemoryRecordStore>, AppState) {
    let store = Arc::new(InMemoryRecordStore::new());
    let shared: Arc<dyn RecordStore> = store.clone();
    let state = AppState::load(shared).await.unwrap();
    (store, state)
}

async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        return (status, serde_json::Value::Null);
    }
    (status, body_json(response).await)
}

#[tokio::test]
async fn creates_an_event_with_no_attendees() {
    let (store, state) = boot().await;

    let (status, created) = send(&state, json_request("POST", "/events", LAUNCH_DAY)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Launch Day");

    let (_, list) = send(&state, empty_request("GET", "/events")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["attendeeCount"], 0);

    let stored: Vec<Event> = load_collection(&*store, EVENTS_KEY).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, created["id"].as_str().unwrap());
}

#[tokio::test]
async fn registers_searches_and_cascades_on_delete() {
    let (store, state) = boot().await;
    let (_, created) = send(&state, json_request("POST", "/events", LAUNCH_DAY)).await;
    let event_id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &state,
        json_request("PUT", "/selection", &format!(r#"{{"eventId":"{event_id}"}}"#)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, ada) = send(&state, json_request("POST", "/attendees", ADA)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ada["eventId"], event_id.as_str());

    let (_, list) = send(&state, empty_request("GET", "/events")).await;
    assert_eq!(list[0]["attendeeCount"], 1);

    send(&state, json_request("PUT", "/search", r#"{"term":"ada"}"#)).await;
    let (_, rows) = send(&state, empty_request("GET", "/attendees")).await;
    assert_eq!(rows["attendees"].as_array().unwrap().len(), 1);
    assert_eq!(rows["attendees"][0]["phone"], "-");

    send(&state, json_request("PUT", "/search", r#"{"term":"zzz"}"#)).await;
    let (_, rows) = send(&state, empty_request("GET", "/attendees")).await;
    assert!(rows["attendees"].as_array().unwrap().is_empty());

    let (status, _) = send(
        &state,
        empty_request("DELETE", &format!("/events/{event_id}?confirm=true")),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&state, empty_request("GET", "/events")).await;
    assert!(list.as_array().unwrap().is_empty());
    let (_, selection) = send(&state, empty_request("GET", "/selection")).await;
    assert!(selection["event"].is_null());

    let attendees: Vec<Attendee> = load_collection(&*store, ATTENDEES_KEY).await.unwrap();
    assert!(attendees.is_empty());
}

#[tokio::test]
async fn keeps_identity_and_creation_time_across_edits_and_reloads() {
    let (store, state) = boot().await;
    let (_, created) = send(&state, json_request("POST", "/events", LAUNCH_DAY)).await;
    let event_id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &state,
        json_request(
            "PUT",
            &format!("/events/{event_id}"),
            r#"{"name":"Launch Night","date":"2024-05-02","location":"Pad 2","description":"moved"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["name"], "Launch Night");

    let shared: Arc<dyn RecordStore> = store.clone();
    let reloaded = AppState::load(shared).await.unwrap();
    let (_, form) = send(
        &reloaded,
        empty_request("GET", &format!("/events/{event_id}/form")),
    )
    .await;
    assert_eq!(form["name"], "Launch Night");
    assert_eq!(form["date"], "2024-05-02");
    assert_eq!(form["description"], "moved");
}

#[tokio::test]
async fn rejects_invalid_input_without_touching_storage() {
    let (store, state) = boot().await;

    let (status, body) = send(
        &state,
        json_request("POST", "/events", r#"{"name":"","date":"2024-05-01","location":"Pad 1"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "domain rejected: name is required");

    let (status, _) = send(&state, json_request("POST", "/attendees", ADA)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    assert_eq!(store.get(EVENTS_KEY).await.unwrap(), None);
    assert_eq!(store.get(ATTENDEES_KEY).await.unwrap(), None);
}
