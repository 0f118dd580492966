use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

use scl_types::TraceRecord;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::error::{StoreError, StoreResult};
use crate::feed::{InboundRecord, RecordFeed};
use crate::traits::RecordStore;

/// In-memory, HashMap-based record store.
///
/// Intended for tests, local demos, and embedding. Every write, local or
/// injected on behalf of a peer, is echoed into the feed once someone has
/// subscribed, mimicking a replicated graph store that round-trips a node's
/// own writes.
pub struct InMemoryRecordStore {
    entries: RwLock<HashMap<String, Value>>,
    feed: Mutex<Option<mpsc::UnboundedSender<InboundRecord>>>,
    subscribed: AtomicBool,
    read_only: AtomicBool,
}

impl InMemoryRecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            feed: Mutex::new(None),
            subscribed: AtomicBool::new(false),
            read_only: AtomicBool::new(false),
        }
    }

    /// Refuse (or resume accepting) local writes.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Simulate a peer writing `payload` under `key`.
    ///
    /// The payload is stored and forwarded to the feed as-is; nothing
    /// checks that it is a well-formed record.
    pub fn inject(&self, key: impl Into<String>, payload: Value) -> StoreResult<()> {
        let key = key.into();
        self.write_entry(&key, payload.clone())?;
        self.forward(InboundRecord::new(key, payload))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted list of stored keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .read()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    fn write_entry(&self, key: &str, payload: Value) -> StoreResult<()> {
        let mut map = self
            .entries
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        map.insert(key.to_string(), payload);
        Ok(())
    }

    fn forward(&self, item: InboundRecord) -> StoreResult<()> {
        let mut guard = self
            .feed
            .lock()
            .map_err(|_| StoreError::Backend("feed lock poisoned".into()))?;
        if let Some(tx) = guard.as_ref() {
            if tx.send(item).is_err() {
                tracing::debug!("record feed receiver dropped; detaching");
                *guard = None;
            }
        }
        Ok(())
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn put(&self, id: &str, record: &TraceRecord) -> StoreResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::ReadOnly);
        }
        let payload =
            serde_json::to_value(record).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.write_entry(id, payload.clone())?;
        self.forward(InboundRecord::new(id, payload))
    }

    fn get(&self, id: &str) -> StoreResult<Option<Value>> {
        let map = self
            .entries
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        Ok(map.get(id).cloned())
    }

    fn subscribe(&self) -> StoreResult<RecordFeed> {
        if self.subscribed.swap(true, Ordering::SeqCst) {
            return Err(StoreError::AlreadySubscribed);
        }
        let (tx, feed) = RecordFeed::channel();
        let mut guard = self
            .feed
            .lock()
            .map_err(|_| StoreError::Backend("feed lock poisoned".into()))?;
        *guard = Some(tx);
        Ok(feed)
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRecordStore")
            .field("entry_count", &self.len())
            .field("read_only", &self.read_only.load(Ordering::SeqCst))
            .finish()
    }
}
