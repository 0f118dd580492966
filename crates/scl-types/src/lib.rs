//! Foundation types for the Supply-Chain Ledger (SCL).
//!
//! This crate provides the data model shared by every other SCL crate:
//! the participants of a custody chain, the items they handle, and the
//! hash-linked records that describe each custody step.
//!
//! # Key Types
//!
//! - [`Actor`]: A chain participant (producer, processor, auditor, ...)
//! - [`Product`]: The item a chain tracks; its `id` partitions chains
//! - [`TraceEvent`]: One custody or processing step
//! - [`TraceRecord`]: The ledger's immutable, hash-linked unit
//! - [`HashInput`]: The canonical payload view hashed into `TraceRecord::hash`
//! - [`TraceChain`]: Read-only per-product projection
//! - [`SyncStatus`] / [`PeerInfo`]: Replication bookkeeping

pub mod actor;
pub mod error;
pub mod event;
pub mod number;
pub mod record;
pub mod sync;

pub use actor::{Actor, ActorType};
pub use error::TypeError;
pub use event::{Coordinates, EventType, Location, Product, TraceEvent};
pub use record::{HashInput, TraceChain, TraceMetadata, TraceRecord, GENESIS_HASH};
pub use sync::{PeerInfo, SyncState, SyncStatus};
