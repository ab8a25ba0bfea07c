pub mod classifier;
pub mod errors;
pub mod models;
pub mod payload;

pub use classifier::{classify, Classification, DispatchMode};
pub use errors::{ClassifyError, StoreError};
pub use models::{ActionKind, Event};
pub use payload::WebhookPayload;
