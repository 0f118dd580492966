use serde::{Deserialize, Serialize};

use crate::event::TraceEvent;

/// `previous_hash` value of a record with no predecessor.
pub const GENESIS_HASH: &str = "0";

/// Provenance bookkeeping carried inside the canonical payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceMetadata {
    pub version: String,
    pub schema_version: String,
    pub network_id: String,
    pub peer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_records: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_records: Option<Vec<String>>,
}

/// The ledger's atomic unit.
///
/// A record is immutable once finalized. `hash` covers
/// `{id, timestamp, previous_hash, event, metadata}` (see [`HashInput`]);
/// `signature` covers `hash:timestamp:actor_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceRecord {
    pub id: String,
    /// Creation time in milliseconds since the UNIX epoch.
    pub timestamp: u64,
    pub previous_hash: String,
    pub hash: String,
    pub event: TraceEvent,
    pub signature: String,
    pub metadata: TraceMetadata,
}

impl TraceRecord {
    /// The canonical payload view of this record.
    pub fn hash_input(&self) -> HashInput<'_> {
        HashInput {
            id: &self.id,
            timestamp: self.timestamp,
            previous_hash: &self.previous_hash,
            event: &self.event,
            metadata: &self.metadata,
        }
    }

    /// Returns `true` if this record starts a chain.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash == GENESIS_HASH
    }

    pub fn product_id(&self) -> &str {
        &self.event.product.id
    }

    pub fn actor_id(&self) -> &str {
        &self.event.actor.id
    }
}

/// Borrowed canonical payload: every record field except `hash` and
/// `signature`.
///
/// Field order is part of the wire contract. Reordering these fields
/// changes every hash in the network.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashInput<'a> {
    pub id: &'a str,
    pub timestamp: u64,
    pub previous_hash: &'a str,
    pub event: &'a TraceEvent,
    pub metadata: &'a TraceMetadata,
}

/// Per-product projection of the record set. Derived on demand, never
/// stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceChain {
    /// The product id.
    pub id: String,
    pub name: String,
    /// Records ordered by ascending timestamp.
    pub records: Vec<TraceRecord>,
    pub is_valid: bool,
    pub last_updated: u64,
}
