use thiserror::Error;

/// Classification failures for inbound webhook payloads.
///
/// All three variants are the sender's fault and map to client errors at the
/// HTTP boundary. The classifier never recovers internally.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Payload matches none of the known webhook shapes.
    #[error("unrecognized payload: no known webhook shape matched")]
    UnrecognizedPayload,

    /// Shape recognized, but a required field is missing, empty, or mistyped.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Pull-request shape with an absent or unknown lifecycle action tag.
    #[error("unrecognized action tag: {0}")]
    UnrecognizedAction(String),
}

/// Storage failures, surfaced unchanged from the event sink.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
