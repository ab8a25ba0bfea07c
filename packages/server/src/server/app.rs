//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::events::DispatchMode;
use crate::kernel::ServerDeps;
use crate::server::routes::{events_handler, health_handler, webhook_handler};
use crate::server::static_files::serve_ui;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
    pub dispatch_mode: DispatchMode,
}

/// Build the Axum application router with production wiring.
pub fn build_app(pool: PgPool, dispatch_mode: DispatchMode) -> Router {
    build_app_with_deps(Arc::new(ServerDeps::postgres(pool)), dispatch_mode)
}

/// Router assembly over explicit dependencies (tests inject mocks here).
pub fn build_app_with_deps(deps: Arc<ServerDeps>, dispatch_mode: DispatchMode) -> Router {
    let state = AppState {
        deps,
        dispatch_mode,
    };

    // CORS configuration - the feed UI is same-origin, but external
    // dashboards poll /events too
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Webhook ingress
        .route("/webhook", post(webhook_handler))
        // Read path for the feed
        .route("/events", get(events_handler))
        // Health check
        .route("/health", get(health_handler))
        // Embedded feed UI at / and anything else
        .fallback(serve_ui)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
