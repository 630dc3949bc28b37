use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use serde_json::json;

use super::domain::OwnerId;
use super::repository::TrackerRepository;
use super::service::TrackerService;

/// Router builder exposing the notification digest and statistics endpoints.
pub fn tracker_router<R>(service: Arc<TrackerService<R>>) -> Router
where
    R: TrackerRepository + 'static,
{
    Router::new()
        .route("/api/v1/notifications", get(notifications_handler::<R>))
        .route("/api/v1/stats", get(stats_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerQuery {
    owner_id: u64,
    /// Optional reference instant, `YYYY-MM-DDThh:mm:ss`. Defaults to the
    /// local wall clock; the pure core itself never reads a clock.
    now: Option<String>,
}

impl OwnerQuery {
    fn resolve_now(&self) -> Result<NaiveDateTime, Response> {
        match self.now.as_deref() {
            None => Ok(Local::now().naive_local()),
            Some(raw) => NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M:%S")
                .map_err(|err| {
                    let payload = json!({
                        "error": format!("invalid 'now' parameter '{raw}': {err}"),
                    });
                    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
                }),
        }
    }
}

pub(crate) async fn notifications_handler<R>(
    State(service): State<Arc<TrackerService<R>>>,
    Query(query): Query<OwnerQuery>,
) -> Response
where
    R: TrackerRepository + 'static,
{
    let now = match query.resolve_now() {
        Ok(now) => now,
        Err(response) => return response,
    };

    match service.reminders(OwnerId(query.owner_id), now) {
        Ok(digest) => {
            let login_reminder = digest.login_reminder();
            let payload = json!({
                "today": digest.today,
                "tomorrow": digest.tomorrow,
                "this_week": digest.this_week,
                "total_count": digest.total_count,
                "skipped_orphans": digest.skipped_orphans,
                "login_reminder": login_reminder,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn stats_handler<R>(
    State(service): State<Arc<TrackerService<R>>>,
    Query(query): Query<OwnerQuery>,
) -> Response
where
    R: TrackerRepository + 'static,
{
    let now = match query.resolve_now() {
        Ok(now) => now,
        Err(response) => return response,
    };

    match service.stats(OwnerId(query.owner_id), now) {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
pub(crate) fn owner_query(owner_id: u64, now: Option<&str>) -> OwnerQuery {
    OwnerQuery {
        owner_id,
        now: now.map(str::to_owned),
    }
}
