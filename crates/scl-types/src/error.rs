use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown event type: {0}")]
    InvalidEventType(String),

    #[error("unknown actor type: {0}")]
    InvalidActorType(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
