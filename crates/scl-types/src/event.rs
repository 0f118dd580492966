use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::actor::Actor;
use crate::error::TypeError;

/// Kind of custody or processing step a record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Production,
    Processing,
    Packaging,
    Shipping,
    Receiving,
    QualityCheck,
    Storage,
    Retail,
    Disposal,
}

impl EventType {
    pub const ALL: [EventType; 9] = [
        EventType::Production,
        EventType::Processing,
        EventType::Packaging,
        EventType::Shipping,
        EventType::Receiving,
        EventType::QualityCheck,
        EventType::Storage,
        EventType::Retail,
        EventType::Disposal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Production => "production",
            EventType::Processing => "processing",
            EventType::Packaging => "packaging",
            EventType::Shipping => "shipping",
            EventType::Receiving => "receiving",
            EventType::QualityCheck => "quality_check",
            EventType::Storage => "storage",
            EventType::Retail => "retail",
            EventType::Disposal => "disposal",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TypeError::InvalidEventType(s.to_string()))
    }
}

/// Geographic point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(with = "crate::number")]
    pub lat: f64,
    #[serde(with = "crate::number")]
    pub lng: f64,
}

/// Where an event took place. Purely descriptive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates: None,
            address: None,
        }
    }
}

/// The physical or logical item a chain tracks. `id` is the chain key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(with = "crate::number")]
    pub quantity: f64,
    pub unit: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            batch: None,
            sku: None,
            quantity,
            unit: unit.into(),
        }
    }
}

/// One custody or processing step.
///
/// `details` is an open key/value map; it is kept sorted by key so the
/// canonical encoding never depends on insertion order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    #[serde(rename = "type")]
    pub kind: EventType,
    pub actor: Actor,
    pub location: Location,
    pub product: Product,
    #[serde(default)]
    pub details: BTreeMap<String, Value>,
}

impl TraceEvent {
    pub fn new(kind: EventType, actor: Actor, location: Location, product: Product) -> Self {
        Self {
            kind,
            actor,
            location,
            product,
            details: BTreeMap::new(),
        }
    }

    /// Builder-style helper for attaching a detail entry.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}
