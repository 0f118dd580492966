//! Replicated record store boundary for the Supply-Chain Ledger.
//!
//! The ledger treats replication as an external collaborator that does two
//! things: durably persists an accepted record, and delivers a lazy,
//! unordered, infinite stream of records written by any peer (eventually
//! including this node's own writes, once round-tripped).
//!
//! # Design Rules
//!
//! 1. `put` is an idempotent upsert keyed by record id.
//! 2. The feed is one-shot: a store hands out at most one subscription and
//!    it cannot be restarted.
//! 3. Feed items are untrusted JSON. The store never validates them; the
//!    ledger's admission gate does.
//! 4. All backend errors are propagated, never silently ignored.

pub mod error;
pub mod feed;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use feed::{InboundRecord, RecordFeed};
pub use memory::InMemoryRecordStore;
pub use traits::RecordStore;
