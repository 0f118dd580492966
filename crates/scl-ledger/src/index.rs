use std::collections::HashMap;

use scl_types::TraceRecord;

use crate::criteria::SearchCriteria;

/// The ledger's local record set.
///
/// Records keep their first-insertion position; an upsert with a known id
/// replaces the record in place. Secondary indexes map product and actor
/// ids to ascending positions so filtered scans still return records in
/// record-set order.
#[derive(Debug, Default)]
pub struct RecordIndex {
    records: Vec<TraceRecord>,
    by_id: HashMap<String, usize>,
    by_product: HashMap<String, Vec<usize>>,
    by_actor: HashMap<String, Vec<usize>>,
}

impl RecordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TraceRecord> {
        self.by_id.get(id).map(|&pos| &self.records[pos])
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Insert or replace by id. Returns `true` if an existing record was
    /// replaced.
    pub fn upsert(&mut self, record: TraceRecord) -> bool {
        match self.by_id.get(&record.id).copied() {
            Some(pos) => {
                let old_product = self.records[pos].event.product.id.clone();
                let old_actor = self.records[pos].event.actor.id.clone();
                if old_product != record.event.product.id {
                    remove_position(&mut self.by_product, &old_product, pos);
                    insert_position(&mut self.by_product, &record.event.product.id, pos);
                }
                if old_actor != record.event.actor.id {
                    remove_position(&mut self.by_actor, &old_actor, pos);
                    insert_position(&mut self.by_actor, &record.event.actor.id, pos);
                }
                self.records[pos] = record;
                true
            }
            None => {
                let pos = self.records.len();
                self.by_id.insert(record.id.clone(), pos);
                insert_position(&mut self.by_product, &record.event.product.id, pos);
                insert_position(&mut self.by_actor, &record.event.actor.id, pos);
                self.records.push(record);
                false
            }
        }
    }

    /// All records for a product, in record-set order.
    pub fn by_product(&self, product_id: &str) -> Vec<&TraceRecord> {
        self.positions(&self.by_product, product_id)
    }

    /// All records authored by an actor, in record-set order.
    pub fn by_actor(&self, actor_id: &str) -> Vec<&TraceRecord> {
        self.positions(&self.by_actor, actor_id)
    }

    /// Records matching `criteria`, in record-set order.
    ///
    /// Narrows through the product or actor index when one of those
    /// filters is present; the full criteria are still applied.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&TraceRecord> {
        let candidates = if let Some(product) = criteria.product_filter() {
            self.by_product(product)
        } else if let Some(actor) = criteria.actor_filter() {
            self.by_actor(actor)
        } else {
            self.records.iter().collect()
        };
        candidates
            .into_iter()
            .filter(|record| criteria.matches(record))
            .collect()
    }

    /// Record count per product id.
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_product.values().map(Vec::len)
    }

    pub fn product_count(&self) -> usize {
        self.by_product.len()
    }

    pub fn actor_count(&self) -> usize {
        self.by_actor.len()
    }

    fn positions(&self, map: &HashMap<String, Vec<usize>>, key: &str) -> Vec<&TraceRecord> {
        map.get(key)
            .map(|positions| positions.iter().map(|&pos| &self.records[pos]).collect())
            .unwrap_or_default()
    }
}

fn insert_position(map: &mut HashMap<String, Vec<usize>>, key: &str, pos: usize) {
    let positions = map.entry(key.to_string()).or_default();
    if let Err(at) = positions.binary_search(&pos) {
        positions.insert(at, pos);
    }
}

fn remove_position(map: &mut HashMap<String, Vec<usize>>, key: &str, pos: usize) {
    if let Some(positions) = map.get_mut(key) {
        if let Ok(at) = positions.binary_search(&pos) {
            positions.remove(at);
        }
        if positions.is_empty() {
            map.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scl_types::{
        Actor, ActorType, EventType, Location, Product, TraceEvent, TraceMetadata, GENESIS_HASH,
    };

    fn record(id: &str, product: &str, actor: &str) -> TraceRecord {
        TraceRecord {
            id: id.into(),
            timestamp: 1,
            previous_hash: GENESIS_HASH.into(),
            hash: String::new(),
            event: TraceEvent::new(
                EventType::Receiving,
                Actor::new(actor, actor, ActorType::Retailer, "pk"),
                Location::new("loc", "Shop"),
                Product::new(product, "Tea", "leaves", 1.0, "box"),
            ),
            signature: String::new(),
            metadata: TraceMetadata {
                version: "1.0.0".into(),
                schema_version: "1.0.0".into(),
                network_id: "net".into(),
                peer_id: actor.into(),
                parent_records: None,
                child_records: None,
            },
        }
    }

    fn ids(records: Vec<&TraceRecord>) -> Vec<&str> {
        records.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn upsert_inserts_then_replaces() {
        let mut index = RecordIndex::new();
        assert!(!index.upsert(record("r1", "P1", "a1")));
        assert!(index.upsert(record("r1", "P1", "a1")));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn replacement_keeps_position() {
        let mut index = RecordIndex::new();
        index.upsert(record("r1", "P1", "a1"));
        index.upsert(record("r2", "P1", "a1"));
        index.upsert(record("r3", "P1", "a1"));
        let mut updated = record("r2", "P1", "a1");
        updated.signature = "new".into();
        index.upsert(updated);

        assert_eq!(ids(index.records().iter().collect()), vec!["r1", "r2", "r3"]);
        assert_eq!(index.get("r2").unwrap().signature, "new");
    }

    #[test]
    fn replacement_moves_secondary_indexes() {
        let mut index = RecordIndex::new();
        index.upsert(record("r1", "P1", "a1"));
        index.upsert(record("r1", "P2", "a2"));

        assert!(index.by_product("P1").is_empty());
        assert!(index.by_actor("a1").is_empty());
        assert_eq!(ids(index.by_product("P2")), vec!["r1"]);
        assert_eq!(index.product_count(), 1);
        assert_eq!(index.actor_count(), 1);
    }

    #[test]
    fn product_lookup_preserves_order() {
        let mut index = RecordIndex::new();
        index.upsert(record("r1", "P1", "a1"));
        index.upsert(record("r2", "P2", "a1"));
        index.upsert(record("r3", "P1", "a2"));
        assert_eq!(ids(index.by_product("P1")), vec!["r1", "r3"]);
        assert_eq!(ids(index.by_actor("a1")), vec!["r1", "r2"]);
        assert!(index.by_product("P9").is_empty());
    }

    #[test]
    fn search_uses_full_criteria_after_narrowing() {
        let mut index = RecordIndex::new();
        index.upsert(record("r1", "P1", "a1"));
        index.upsert(record("r2", "P1", "a2"));
        index.upsert(record("r3", "P2", "a2"));

        let criteria = SearchCriteria::new().product("P1").actor("a2");
        assert_eq!(ids(index.search(&criteria)), vec!["r2"]);

        let criteria = SearchCriteria::new().actor("a2");
        assert_eq!(ids(index.search(&criteria)), vec!["r2", "r3"]);

        assert_eq!(index.search(&SearchCriteria::new()).len(), 3);
    }

    #[test]
    fn chain_lengths_per_product() {
        let mut index = RecordIndex::new();
        index.upsert(record("r1", "P1", "a1"));
        index.upsert(record("r2", "P1", "a1"));
        index.upsert(record("r3", "P2", "a1"));
        let mut lengths: Vec<usize> = index.chain_lengths().collect();
        lengths.sort();
        assert_eq!(lengths, vec![1, 2]);
    }
}
