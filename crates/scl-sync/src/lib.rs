//! Inbound replication for the Supply-Chain Ledger.
//!
//! Records written by any peer arrive through the store's feed as
//! untrusted JSON. The [`SyncWorker`] drains that feed into the ledger's
//! admission gate; it never stops on a bad item. [`PeerTracker`] keeps the
//! peer table and the shared connection count in step with the
//! transport's hello/bye signals.

pub mod error;
pub mod peers;
pub mod source;
pub mod worker;

pub use error::{SyncError, SyncResult};
pub use peers::PeerTracker;
pub use source::InboundSource;
pub use worker::{SyncHandle, SyncReport, SyncWorker};
