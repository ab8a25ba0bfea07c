// MockEventSink - mock sink implementation for testing
//
// Records stored events in memory so handler tests can assert on what was
// handed across the sink boundary without a live database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::BaseEventSink;
use crate::domains::events::{Event, StoreError};

pub struct MockEventSink {
    stored: Arc<Mutex<Vec<Event>>>,
    fail: bool,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A sink whose every call fails, for exercising error paths.
    pub fn failing() -> Self {
        Self {
            stored: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Events stored so far, in insertion order.
    pub fn stored(&self) -> Vec<Event> {
        self.stored.lock().unwrap().clone()
    }
}

impl Default for MockEventSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseEventSink for MockEventSink {
    async fn store(&self, event: &Event) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        self.stored.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn recent_events(&self, limit: u32) -> Result<Vec<Event>, StoreError> {
        if self.fail {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        let mut events = self.stored.lock().unwrap().clone();
        events.reverse();
        events.truncate(limit as usize);
        Ok(events)
    }
}
