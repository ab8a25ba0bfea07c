//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod event_sink;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use event_sink::PgEventSink;
pub use test_dependencies::MockEventSink;
pub use traits::BaseEventSink;
