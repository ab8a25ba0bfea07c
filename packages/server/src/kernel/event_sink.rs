use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::BaseEventSink;
use crate::domains::events::{Event, StoreError};

/// Postgres-backed event sink.
///
/// Delegates to the model queries; holds its own handle on the shared pool.
pub struct PgEventSink {
    pool: PgPool,
}

impl PgEventSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseEventSink for PgEventSink {
    async fn store(&self, event: &Event) -> Result<(), StoreError> {
        event.insert(&self.pool).await
    }

    async fn recent_events(&self, limit: u32) -> Result<Vec<Event>, StoreError> {
        Event::find_recent(i64::from(limit), &self.pool).await
    }
}
