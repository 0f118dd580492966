use std::collections::BTreeMap;

use scl_types::{
    Actor, ActorType, EventType, Location, Product, TraceEvent, TraceMetadata, TraceRecord,
    GENESIS_HASH,
};
use serde_json::Value;

use crate::hasher::canonical_hash;

/// Hash of [`unsigned_record`] computed by an independent JSON + SHA-256
/// implementation.
pub const REFERENCE_HASH: &str =
    "19aabaab6e822704f5a3321be9e4745cb904a7fc6c7898e7804e36b129b7dff9";

/// HMAC-SHA256 of `REFERENCE_HASH:1700000000000:actor-1` under `secret-key`.
pub const REFERENCE_SIGNATURE: &str =
    "7b967e5f32f7fa2bce2a4632923c6d2d6c101f21cb495e0d64aba44759e110ca";

pub fn actor() -> Actor {
    Actor {
        id: "actor-1".into(),
        name: "Green Farm".into(),
        kind: ActorType::Producer,
        public_key: "pk-1".into(),
        verified: true,
    }
}

pub fn metadata() -> TraceMetadata {
    TraceMetadata {
        version: "1.0.0".into(),
        schema_version: "1.0.0".into(),
        network_id: "supply-chain-network".into(),
        peer_id: "actor-1".into(),
        parent_records: None,
        child_records: None,
    }
}

pub fn event(product_id: &str, kind: EventType) -> TraceEvent {
    let mut details = BTreeMap::new();
    details.insert("grade".to_string(), Value::from("A"));
    details.insert("organic".to_string(), Value::from(true));
    TraceEvent {
        kind,
        actor: actor(),
        location: Location::new("loc-1", "North Field"),
        product: Product::new(product_id, "Apples", "fruit", 100.0, "kg"),
        details,
    }
}

/// The reference record, hash filled in, signature empty.
pub fn unsigned_record() -> TraceRecord {
    let mut record = TraceRecord {
        id: "rec-0001".into(),
        timestamp: 1_700_000_000_000,
        previous_hash: GENESIS_HASH.into(),
        hash: String::new(),
        event: event("P1", EventType::Production),
        signature: String::new(),
        metadata: metadata(),
    };
    record.hash = canonical_hash(&record.hash_input()).unwrap();
    record
}

/// A correctly linked chain of `len` records for product `P1`.
pub fn chain(len: usize) -> Vec<TraceRecord> {
    let mut records: Vec<TraceRecord> = Vec::with_capacity(len);
    for i in 0..len {
        let previous_hash = records
            .last()
            .map(|r| r.hash.clone())
            .unwrap_or_else(|| GENESIS_HASH.to_string());
        let kind = if i == 0 {
            EventType::Production
        } else {
            EventType::Shipping
        };
        let mut record = TraceRecord {
            id: format!("rec-{i}"),
            timestamp: 1_700_000_000_000 + (i as u64) * 1_000,
            previous_hash,
            hash: String::new(),
            event: event("P1", kind),
            signature: String::new(),
            metadata: metadata(),
        };
        record.hash = canonical_hash(&record.hash_input()).unwrap();
        records.push(record);
    }
    records
}

/// Recompute a record's hash after a deliberate edit.
pub fn rehash(record: &mut TraceRecord) {
    record.hash = canonical_hash(&record.hash_input()).unwrap();
}
