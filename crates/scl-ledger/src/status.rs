use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use scl_types::{SyncState, SyncStatus};

/// Shared, cloneable sync-status sink.
///
/// Ingestion and peer tracking write to it opportunistically; observers
/// take snapshots. Bookkeeping survives a poisoned lock.
#[derive(Clone, Debug, Default)]
pub struct StatusBoard {
    inner: Arc<RwLock<SyncStatus>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SyncStatus {
        self.read().clone()
    }

    /// Record a successful admission.
    pub fn record_sync(&self, at_ms: u64, records_count: usize) {
        let mut status = self.write();
        status.last_sync = at_ms;
        status.records_count = records_count;
    }

    pub fn set_state(&self, state: SyncState) {
        self.write().status = state;
    }

    pub fn peer_connected(&self) {
        let mut status = self.write();
        status.peers_connected = status.peers_connected.saturating_add(1);
    }

    pub fn peer_disconnected(&self) {
        let mut status = self.write();
        status.peers_connected = status.peers_connected.saturating_sub(1);
    }

    fn read(&self) -> RwLockReadGuard<'_, SyncStatus> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SyncStatus> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
