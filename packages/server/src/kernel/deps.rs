//! Server dependencies for request handlers (using traits for testability)

use std::sync::Arc;

use sqlx::PgPool;

use super::event_sink::PgEventSink;
use super::traits::BaseEventSink;

/// Server dependencies accessible to request handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub events: Arc<dyn BaseEventSink>,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, events: Arc<dyn BaseEventSink>) -> Self {
        Self { db_pool, events }
    }

    /// Production wiring: Postgres-backed sink over the shared pool.
    pub fn postgres(db_pool: PgPool) -> Self {
        let events = Arc::new(PgEventSink::new(db_pool.clone()));
        Self::new(db_pool, events)
    }
}
