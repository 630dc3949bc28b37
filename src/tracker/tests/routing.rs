use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use super::common::*;
use crate::tracker::repository::MemoryStore;
use crate::tracker::router::{notifications_handler, owner_query, stats_handler};
use crate::tracker::service::TrackerService;

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

fn seeded_service() -> Arc<TrackerService<MemoryStore>> {
    let store = MemoryStore::new();
    store.push_application(application(1, "Acme", date(2024, 1, 5)));
    store.push_interview(scheduled_interview(1, 1, datetime(2024, 1, 29, 15, 0)));
    store.push_interview(scheduled_interview(2, 1, datetime(2024, 1, 30, 9, 0)));
    Arc::new(TrackerService::new(Arc::new(store)))
}

#[tokio::test]
async fn notifications_handler_returns_digest_with_login_reminder() {
    let response = notifications_handler::<MemoryStore>(
        State(seeded_service()),
        Query(owner_query(OWNER.0, Some("2024-01-29T10:00:00"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total_count"], 2);
    assert_eq!(body["today"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["tomorrow"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["login_reminder"], "You have 1 interview today");
}

#[tokio::test]
async fn notifications_handler_rejects_malformed_now() {
    let response = notifications_handler::<MemoryStore>(
        State(seeded_service()),
        Query(owner_query(OWNER.0, Some("next tuesday"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stats_handler_returns_aggregates() {
    let response = stats_handler::<MemoryStore>(
        State(seeded_service()),
        Query(owner_query(OWNER.0, Some("2024-02-10T00:00:00"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["waiting"], 1);
    assert_eq!(body["conversion_rate"], 0);
    assert_eq!(body["days_in_use"], 36);
}

#[tokio::test]
async fn handlers_map_repository_failures_to_internal_errors() {
    let service = Arc::new(TrackerService::new(Arc::new(UnavailableRepository)));

    let response = notifications_handler::<UnavailableRepository>(
        State(service.clone()),
        Query(owner_query(OWNER.0, Some("2024-01-29T10:00:00"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = stats_handler::<UnavailableRepository>(
        State(service),
        Query(owner_query(OWNER.0, Some("2024-01-29T10:00:00"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
