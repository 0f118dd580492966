/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Storage backend is read-only or otherwise refusing writes.
    #[error("store is read-only")]
    ReadOnly,

    /// The inbound feed was already handed out.
    #[error("record feed already subscribed")]
    AlreadySubscribed,

    /// Failure inside the storage backend.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
