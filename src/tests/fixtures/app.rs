use crate::shared::infrastructure::record_store::RecordStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::state::AppState;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

pub async fn make_test_state(store: InMemoryRecordStore) -> AppState {
    let store: Arc<dyn RecordStore> = Arc::new(store);
    AppState::load(store).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
