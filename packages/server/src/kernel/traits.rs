// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. The classifier
// stays a pure function; everything with a side effect sits behind a trait
// so handlers and tests never depend on a live database.
//
// Naming convention: Base* for trait names (e.g., BaseEventSink)

use async_trait::async_trait;

use crate::domains::events::{Event, StoreError};

// =============================================================================
// Event Sink Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseEventSink: Send + Sync {
    /// Persist one classified event. Called exactly once per accepted
    /// payload; any retry policy belongs to the delivery side, not here.
    async fn store(&self, event: &Event) -> Result<(), StoreError>;

    /// Up to `limit` events, most recent first.
    async fn recent_events(&self, limit: u32) -> Result<Vec<Event>, StoreError>;
}
