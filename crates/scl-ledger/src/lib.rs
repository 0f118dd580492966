//! Trace ledger for the Supply-Chain Ledger (SCL).
//!
//! This crate is the heart of SCL. It provides:
//! - An identity-bound [`Ledger`] that creates hash-linked, signed records
//! - Per-product chain projection and validation
//! - Conjunctive record search and network statistics
//! - The admission gate for records arriving from remote peers
//! - `TraceWriter` / `TraceReader` trait boundaries
//! - [`LedgerConfig`] loaded from TOML

pub mod admission;
pub mod clock;
pub mod config;
pub mod criteria;
pub mod error;
pub mod index;
pub mod ledger;
pub mod stats;
pub mod status;
pub mod traits;

pub use admission::Admission;
pub use config::LedgerConfig;
pub use criteria::SearchCriteria;
pub use error::LedgerError;
pub use ledger::{Ledger, LedgerIdentity, UNKNOWN_PRODUCT};
pub use stats::NetworkStats;
pub use status::StatusBoard;
pub use traits::{TraceReader, TraceWriter};
