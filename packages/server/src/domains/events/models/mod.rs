pub mod event;

pub use event::{ActionKind, Event};
