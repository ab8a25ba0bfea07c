//! Read path: the latest activity events for the feed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domains::events::{ActionKind, Event};
use crate::server::app::AppState;

/// How many events the feed shows.
const FEED_LIMIT: u32 = 10;

/// Display projection of an event. `request_id` is deliberately not exposed.
#[derive(Serialize)]
pub struct EventView {
    pub author: String,
    pub action: ActionKind,
    pub from_branch: Option<String>,
    pub to_branch: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Event> for EventView {
    fn from(event: Event) -> Self {
        Self {
            author: event.author,
            action: event.action,
            from_branch: event.from_branch,
            to_branch: event.to_branch,
            timestamp: event.timestamp,
        }
    }
}

/// Return up to the 10 most recent events, newest first.
pub async fn events_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventView>>, StatusCode> {
    match state.deps.events.recent_events(FEED_LIMIT).await {
        Ok(events) => Ok(Json(events.into_iter().map(EventView::from).collect())),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load recent events");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn event_view_omits_request_id() {
        let event = Event {
            request_id: "abc123".to_string(),
            author: "alice".to_string(),
            action: ActionKind::Push,
            from_branch: None,
            to_branch: "main".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(EventView::from(event)).unwrap();
        assert!(json.get("request_id").is_none());
        assert_eq!(json["author"], "alice");
        assert_eq!(json["action"], "PUSH");
        assert_eq!(json["from_branch"], serde_json::Value::Null);
        assert_eq!(json["to_branch"], "main");
    }
}
