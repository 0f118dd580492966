use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Role a participant plays in the supply chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorType {
    Producer,
    Processor,
    Distributor,
    Retailer,
    Consumer,
    Regulator,
    Auditor,
}

impl ActorType {
    pub const ALL: [ActorType; 7] = [
        ActorType::Producer,
        ActorType::Processor,
        ActorType::Distributor,
        ActorType::Retailer,
        ActorType::Consumer,
        ActorType::Regulator,
        ActorType::Auditor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActorType::Producer => "producer",
            ActorType::Processor => "processor",
            ActorType::Distributor => "distributor",
            ActorType::Retailer => "retailer",
            ActorType::Consumer => "consumer",
            ActorType::Regulator => "regulator",
            ActorType::Auditor => "auditor",
        }
    }
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TypeError::InvalidActorType(s.to_string()))
    }
}

/// A chain participant.
///
/// Once embedded in a record the actor is part of the canonical payload and
/// can no longer change without invalidating that record's hash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ActorType,
    pub public_key: String,
    pub verified: bool,
}

impl Actor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ActorType,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            public_key: public_key.into(),
            verified: false,
        }
    }
}
