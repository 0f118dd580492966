use scl_types::{EventType, TraceRecord};
use serde::{Deserialize, Serialize};

/// Conjunctive record filter. Absent criteria (and empty strings) impose
/// no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub product_id: Option<String>,
    pub actor_id: Option<String>,
    pub event_type: Option<EventType>,
    /// Inclusive `[start, end]` in milliseconds.
    pub date_range: Option<(u64, u64)>,
    /// Case-insensitive substring of the location name.
    pub location: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product(mut self, id: impl Into<String>) -> Self {
        self.product_id = Some(id.into());
        self
    }

    pub fn actor(mut self, id: impl Into<String>) -> Self {
        self.actor_id = Some(id.into());
        self
    }

    pub fn event_type(mut self, kind: EventType) -> Self {
        self.event_type = Some(kind);
        self
    }

    pub fn between(mut self, start: u64, end: u64) -> Self {
        self.date_range = Some((start, end));
        self
    }

    pub fn location(mut self, fragment: impl Into<String>) -> Self {
        self.location = Some(fragment.into());
        self
    }

    /// The product filter, if one is in effect.
    pub fn product_filter(&self) -> Option<&str> {
        non_empty(&self.product_id)
    }

    /// The actor filter, if one is in effect.
    pub fn actor_filter(&self) -> Option<&str> {
        non_empty(&self.actor_id)
    }

    pub fn matches(&self, record: &TraceRecord) -> bool {
        if let Some(product) = self.product_filter() {
            if record.event.product.id != product {
                return false;
            }
        }
        if let Some(actor) = self.actor_filter() {
            if record.event.actor.id != actor {
                return false;
            }
        }
        if let Some(kind) = self.event_type {
            if record.event.kind != kind {
                return false;
            }
        }
        if let Some((start, end)) = self.date_range {
            if record.timestamp < start || record.timestamp > end {
                return false;
            }
        }
        if let Some(fragment) = non_empty(&self.location) {
            let name = record.event.location.name.to_lowercase();
            if !name.contains(&fragment.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scl_types::{
        Actor, ActorType, Location, Product, TraceEvent, TraceMetadata, GENESIS_HASH,
    };

    fn record(product: &str, actor: &str, kind: EventType, ts: u64, place: &str) -> TraceRecord {
        TraceRecord {
            id: format!("{product}-{ts}"),
            timestamp: ts,
            previous_hash: GENESIS_HASH.into(),
            hash: String::new(),
            event: TraceEvent::new(
                kind,
                Actor::new(actor, actor, ActorType::Processor, "pk"),
                Location::new("loc", place),
                Product::new(product, "Coffee", "beans", 1.0, "kg"),
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

    #[test]
    fn empty_criteria_match_everything() {
        let r = record("P1", "a1", EventType::Processing, 10, "Roastery");
        assert!(SearchCriteria::new().matches(&r));
    }

    #[test]
    fn empty_strings_are_ignored() {
        let r = record("P1", "a1", EventType::Processing, 10, "Roastery");
        let criteria = SearchCriteria::new().product("").actor("").location("");
        assert!(criteria.matches(&r));
    }

    #[test]
    fn criteria_are_conjunctive() {
        let r = record("P1", "a1", EventType::Processing, 10, "Roastery");
        assert!(SearchCriteria::new().product("P1").actor("a1").matches(&r));
        assert!(!SearchCriteria::new().product("P1").actor("a2").matches(&r));
        assert!(!SearchCriteria::new()
            .product("P1")
            .event_type(EventType::Shipping)
            .matches(&r));
    }

    #[test]
    fn date_range_is_inclusive() {
        let r = record("P1", "a1", EventType::Processing, 10, "Roastery");
        assert!(SearchCriteria::new().between(10, 10).matches(&r));
        assert!(SearchCriteria::new().between(5, 10).matches(&r));
        assert!(!SearchCriteria::new().between(11, 20).matches(&r));
        assert!(!SearchCriteria::new().between(0, 9).matches(&r));
    }

    #[test]
    fn location_is_case_insensitive_substring() {
        let r = record("P1", "a1", EventType::Processing, 10, "Port of Rotterdam");
        assert!(SearchCriteria::new().location("rotter").matches(&r));
        assert!(SearchCriteria::new().location("PORT OF").matches(&r));
        assert!(!SearchCriteria::new().location("hamburg").matches(&r));
    }
}
