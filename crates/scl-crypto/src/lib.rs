//! Hashing and signing engine for the Supply-Chain Ledger.
//!
//! Pure functions over record data:
//! - canonical SHA-256 hashing of a record's payload ([`hasher`])
//! - chain linkage verification with break reporting ([`chain`])
//! - HMAC-SHA256 record signatures, the network's compatible scheme ([`signer`])
//! - Ed25519 record signatures as an opt-in asymmetric scheme ([`ed25519`])
//! - key-pair and secure-id generation ([`keys`])
//!
//! All crypto operations wrap established libraries; no custom cryptography.

pub mod chain;
pub mod ed25519;
pub mod hasher;
pub mod keys;
pub mod scheme;
pub mod signer;

#[cfg(test)]
pub(crate) mod fixtures;

pub use chain::{validate_chain, ChainError, ChainVerifier};
pub use hasher::{canonical_hash, validate_record, CanonicalHasher, HasherError};
pub use keys::{generate_ed25519_key_pair, generate_key_pair, generate_secure_id, KeyPair};
pub use scheme::{RecordSigner, SignatureScheme};
pub use signer::{sign_record, signing_message, verify_signature, SignatureError};
