use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use scl_crypto::{canonical_hash, validate_chain, validate_record, RecordSigner, SignatureScheme};
use scl_store::{InboundRecord, RecordStore};
use scl_types::{Actor, SyncStatus, TraceChain, TraceEvent, TraceRecord, GENESIS_HASH};
use serde_json::Value;

use crate::admission::Admission;
use crate::clock::{now_ms, MonotonicClock};
use crate::config::LedgerConfig;
use crate::criteria::SearchCriteria;
use crate::error::LedgerError;
use crate::index::RecordIndex;
use crate::stats::NetworkStats;
use crate::status::StatusBoard;
use crate::traits::{TraceReader, TraceWriter};

/// Chain name used when the earliest record carries no product name.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// The acting participant and the key it signs with.
#[derive(Debug)]
pub struct LedgerIdentity {
    actor: Actor,
    signer: RecordSigner,
}

impl LedgerIdentity {
    pub fn new(actor: Actor, signer: RecordSigner) -> Self {
        Self { actor, signer }
    }

    pub fn from_private_key(
        actor: Actor,
        scheme: SignatureScheme,
        private_key: &str,
    ) -> Result<Self, LedgerError> {
        Ok(Self::new(actor, RecordSigner::new(scheme, private_key)?))
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn signer(&self) -> &RecordSigner {
        &self.signer
    }
}

/// Identity-bound trace ledger over a replicated record store.
///
/// The ledger exclusively owns the local record set. Creation and
/// admission serialize on one write lock; reads share it. Each instance
/// carries its own identity, so several actors can run in one process.
pub struct Ledger {
    config: LedgerConfig,
    store: Arc<dyn RecordStore>,
    identity: RwLock<Option<Arc<LedgerIdentity>>>,
    inner: RwLock<RecordIndex>,
    clock: MonotonicClock,
    status: StatusBoard,
}

impl Ledger {
    /// Create an uninitialized ledger. Reads and admission work right away;
    /// creation fails with [`LedgerError::Uninitialized`] until
    /// [`Ledger::initialize`] is called.
    pub fn new(store: Arc<dyn RecordStore>, config: LedgerConfig) -> Self {
        Self {
            config,
            store,
            identity: RwLock::new(None),
            inner: RwLock::new(RecordIndex::new()),
            clock: MonotonicClock::new(),
            status: StatusBoard::new(),
        }
    }

    /// Create a ledger already bound to an actor and key.
    pub fn with_identity(
        store: Arc<dyn RecordStore>,
        config: LedgerConfig,
        actor: Actor,
        private_key: &str,
    ) -> Result<Self, LedgerError> {
        let ledger = Self::new(store, config);
        ledger.initialize(actor, private_key)?;
        Ok(ledger)
    }

    /// Bind (or rebind) the acting identity. The key is interpreted under
    /// the configured signature scheme.
    pub fn initialize(&self, actor: Actor, private_key: &str) -> Result<(), LedgerError> {
        let identity =
            LedgerIdentity::from_private_key(actor, self.config.signature_scheme, private_key)?;
        tracing::info!(
            actor_id = %identity.actor().id,
            scheme = %self.config.signature_scheme,
            "ledger initialized"
        );
        let mut guard = self.identity.write().map_err(|_| LedgerError::LockPoisoned)?;
        *guard = Some(Arc::new(identity));
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.identity().is_ok()
    }

    /// The current actor, if initialized.
    pub fn actor(&self) -> Option<Actor> {
        self.identity().ok().map(|id| id.actor().clone())
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Shared handle to the sync-status sink.
    pub fn status_board(&self) -> StatusBoard {
        self.status.clone()
    }

    pub fn sync_status(&self) -> SyncStatus {
        self.status.snapshot()
    }

    /// Snapshot of the local record set in insertion order.
    pub fn records(&self) -> Vec<TraceRecord> {
        self.read_or(Vec::new(), |index| index.records().to_vec())
    }

    pub fn len(&self) -> usize {
        self.read_or(0, RecordIndex::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check a record's signature under the configured scheme.
    pub fn verify_record_signature(&self, record: &TraceRecord, key: &str) -> bool {
        self.config.signature_scheme.verify(record, key)
    }

    fn identity(&self) -> Result<Arc<LedgerIdentity>, LedgerError> {
        self.identity
            .read()
            .map_err(|_| LedgerError::LockPoisoned)?
            .clone()
            .ok_or(LedgerError::Uninitialized)
    }

    /// Resolve `previous_hash` and the earliest allowed timestamp.
    fn resolve_predecessor(
        &self,
        index: &RecordIndex,
        previous_record_id: Option<&str>,
    ) -> Result<(String, u64), LedgerError> {
        let Some(previous_id) = previous_record_id else {
            return Ok((GENESIS_HASH.to_string(), 0));
        };
        match index.get(previous_id) {
            Some(previous) => Ok((previous.hash.clone(), previous.timestamp.saturating_add(1))),
            None if self.config.strict_predecessor => {
                Err(LedgerError::UnknownPredecessor(previous_id.to_string()))
            }
            None => {
                tracing::warn!(
                    previous_id,
                    "previous record not found; starting a new chain"
                );
                Ok((GENESIS_HASH.to_string(), 0))
            }
        }
    }

    fn read_index(&self) -> Result<RwLockReadGuard<'_, RecordIndex>, LedgerError> {
        self.inner.read().map_err(|_| LedgerError::LockPoisoned)
    }

    fn write_index(&self) -> Result<RwLockWriteGuard<'_, RecordIndex>, LedgerError> {
        self.inner.write().map_err(|_| LedgerError::LockPoisoned)
    }

    fn read_or<T>(&self, default: T, f: impl FnOnce(&RecordIndex) -> T) -> T {
        match self.read_index() {
            Ok(index) => f(&index),
            Err(err) => {
                tracing::error!(error = %err, "record set unavailable");
                default
            }
        }
    }

    fn reject_malformed(key: &str, reason: impl Into<String>) -> Admission {
        let reason = reason.into();
        tracing::warn!(key, reason = %reason, "discarding malformed record from peer");
        Admission::Rejected(LedgerError::MalformedInput(reason))
    }
}

impl TraceWriter for Ledger {
    /// Create, sign, persist, and index a record.
    ///
    /// The event's actor is replaced by the ledger's actor. The record is
    /// only indexed after the store accepted it. The write lock is held from
    /// predecessor lookup through upsert.
    fn create_record(
        &self,
        mut event: TraceEvent,
        previous_record_id: Option<&str>,
    ) -> Result<TraceRecord, LedgerError> {
        let identity = self.identity()?;
        let mut index = self.write_index()?;
        let (previous_hash, floor) = self.resolve_predecessor(&index, previous_record_id)?;

        event.actor = identity.actor().clone();
        let mut record = TraceRecord {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: self.clock.next(floor),
            previous_hash,
            hash: String::new(),
            metadata: self.config.metadata_for(&identity.actor().id),
            event,
            signature: String::new(),
        };
        record.hash = canonical_hash(&record.hash_input())
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;
        record.signature = identity.signer().sign(&record)?;

        if !validate_record(&record) || !identity.signer().verify(&record) {
            tracing::error!(
                record_id = %record.id,
                "generated record failed its own validation; refusing to persist"
            );
            return Err(LedgerError::ValidationFailure {
                id: record.id,
                reason: "self-check failed".into(),
            });
        }

        self.store.put(&record.id, &record).map_err(|e| {
            tracing::error!(record_id = %record.id, error = %e, "failed to store record");
            LedgerError::PersistenceFailure(e.to_string())
        })?;

        index.upsert(record.clone());
        drop(index);

        tracing::info!(
            record_id = %record.id,
            product_id = %record.product_id(),
            event_type = %record.event.kind,
            genesis = record.is_genesis(),
            "trace record created"
        );
        Ok(record)
    }

    /// Admission gate for a typed remote record: hash check, then upsert.
    fn ingest_remote_record(&self, record: TraceRecord) -> Admission {
        if !validate_record(&record) {
            tracing::warn!(record_id = %record.id, "received invalid record from peer");
            return Admission::Rejected(LedgerError::ValidationFailure {
                id: record.id,
                reason: "hash mismatch".into(),
            });
        }

        let id = record.id.clone();
        let (replaced, count) = match self.write_index() {
            Ok(mut index) => {
                let replaced = index.upsert(record);
                (replaced, index.len())
            }
            Err(err) => {
                tracing::error!(record_id = %id, error = %err, "cannot admit record");
                return Admission::Rejected(err);
            }
        };

        self.status.record_sync(now_ms(), count);
        tracing::debug!(record_id = %id, replaced, "admitted remote record");
        Admission::Admitted { id, replaced }
    }

    /// Admission gate for a raw feed item.
    fn ingest_inbound(&self, item: &InboundRecord) -> Admission {
        let Some(object) = item.payload.as_object() else {
            return Self::reject_malformed(&item.key, "payload is not an object");
        };
        match object.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => {}
            _ => return Self::reject_malformed(&item.key, "payload has no id"),
        }

        let record: TraceRecord = match serde_json::from_value(item.payload.clone()) {
            Ok(record) => record,
            Err(e) => return Self::reject_malformed(&item.key, e.to_string()),
        };
        if record.id != item.key {
            tracing::debug!(key = %item.key, record_id = %record.id, "feed key differs from record id");
        }
        self.ingest_remote_record(record)
    }
}

impl TraceReader for Ledger {
    /// Per-product chain projection. Validity is judged over this product's
    /// records only.
    fn get_trace_chain(&self, product_id: &str) -> Option<TraceChain> {
        let mut records: Vec<TraceRecord> = self.read_or(Vec::new(), |index| {
            index.by_product(product_id).into_iter().cloned().collect()
        });
        if records.is_empty() {
            return None;
        }
        records.sort_by_key(|r| r.timestamp);

        let is_valid = validate_chain(&records);
        let last_updated = records.iter().map(|r| r.timestamp).max().unwrap_or(0);
        let name = match records[0].event.product.name.as_str() {
            "" => UNKNOWN_PRODUCT.to_string(),
            name => name.to_string(),
        };

        Some(TraceChain {
            id: product_id.to_string(),
            name,
            records,
            is_valid,
            last_updated,
        })
    }

    fn search_records(&self, criteria: &SearchCriteria) -> Vec<TraceRecord> {
        self.read_or(Vec::new(), |index| {
            index.search(criteria).into_iter().cloned().collect()
        })
    }

    fn network_stats(&self) -> NetworkStats {
        self.read_or(NetworkStats::default(), NetworkStats::compute)
    }

    fn get_record(&self, id: &str) -> Option<TraceRecord> {
        self.read_or(None, |index| index.get(id).cloned())
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("actor", &self.actor().map(|a| a.id))
            .field("records", &self.len())
            .field("config", &self.config)
            .finish()
    }
}
