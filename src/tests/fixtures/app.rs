// App state wired to an in-memory repository, for inbound adapter tests.

use axum::http::HeaderName;
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

use crate::shared::infrastructure::cart_repository::in_memory::InMemoryCartRepository;
use crate::shell::state::AppState;

pub const IDENTITY_HEADER: &str = "x-user-id";

pub fn make_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryCartRepository::new()),
        HeaderName::from_static(IDENTITY_HEADER),
        3,
    )
}

pub fn make_offline_state() -> AppState {
    let mut repository = InMemoryCartRepository::new();
    repository.toggle_offline();
    AppState::new(
        Arc::new(repository),
        HeaderName::from_static(IDENTITY_HEADER),
        3,
    )
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
