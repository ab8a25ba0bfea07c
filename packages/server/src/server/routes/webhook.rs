//! GitHub webhook ingress.
//!
//! Receives raw webhook deliveries, runs them through the classifier, and
//! hands accepted events to the event sink exactly once. Classification
//! failures are the sender's fault (400); sink failures are ours (500).

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{SubsecRound, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domains::events::classify;
use crate::server::app::AppState;

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    status: String,
}

#[derive(Debug, Serialize)]
pub struct WebhookErrorResponse {
    error: String,
}

/// Handle one webhook delivery.
pub async fn webhook_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<Json<WebhookResponse>, (StatusCode, Json<WebhookErrorResponse>)> {
    let delivery = headers
        .get("x-github-delivery")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    let classification = classify(&payload, state.dispatch_mode).map_err(|e| {
        tracing::warn!(
            delivery = %delivery,
            error = %e,
            "Rejected webhook payload"
        );
        (
            StatusCode::BAD_REQUEST,
            Json(WebhookErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    // The timestamp is assigned here, at classification success, truncated
    // to whole seconds. Timestamps inside the payload are not authoritative.
    let event = classification.into_event(Utc::now().trunc_subsecs(0));

    tracing::info!(
        delivery = %delivery,
        request_id = %event.request_id,
        author = %event.author,
        action = ?event.action,
        to_branch = %event.to_branch,
        "Classified webhook event"
    );

    if let Err(e) = state.deps.events.store(&event).await {
        tracing::error!(delivery = %delivery, error = %e, "Failed to store event");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(WebhookErrorResponse {
                error: e.to_string(),
            }),
        ));
    }

    Ok(Json(WebhookResponse {
        status: "Event received".to_string(),
    }))
}
