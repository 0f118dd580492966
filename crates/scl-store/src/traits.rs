use scl_types::TraceRecord;
use serde_json::Value;

use crate::error::StoreResult;
use crate::feed::RecordFeed;

/// Durable, replicated record store.
///
/// All implementations must satisfy these invariants:
/// - `put` is an upsert by id; writing the same record twice is harmless.
/// - A successful `put` means the record is durable locally.
/// - `subscribe` succeeds at most once per store.
/// - The feed makes no ordering or exactly-once promises.
pub trait RecordStore: Send + Sync {
    /// Persist a record under its id.
    fn put(&self, id: &str, record: &TraceRecord) -> StoreResult<()>;

    /// Read the raw stored value for an id.
    ///
    /// Returns `Ok(None)` if nothing is stored under the id.
    fn get(&self, id: &str) -> StoreResult<Option<Value>>;

    /// Take the inbound feed of records written by any peer.
    fn subscribe(&self) -> StoreResult<RecordFeed>;
}
