use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("inbound feed closed")]
    FeedClosed,

    #[error("ledger error: {0}")]
    Ledger(#[from] scl_ledger::LedgerError),

    #[error("store error: {0}")]
    Store(#[from] scl_store::StoreError),

    #[error("sync task failed: {0}")]
    TaskFailed(String),
}

pub type SyncResult<T> = Result<T, SyncError>;
