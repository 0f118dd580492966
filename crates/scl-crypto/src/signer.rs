//! HMAC-SHA256 record signatures.
//!
//! This is the network's established scheme. It is a symmetric keyed MAC:
//! the key that signs a record is the key that verifies it, even though
//! peers have historically called these keys "private" and "public".
//! See [`crate::ed25519`] for a true asymmetric alternative.

use hmac::{Hmac, Mac};
use scl_types::TraceRecord;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// The signed message: `hash:timestamp:actor_id`.
pub fn signing_message(record: &TraceRecord) -> String {
    format!(
        "{}:{}:{}",
        record.hash, record.timestamp, record.event.actor.id
    )
}

/// Sign a record with a shared secret. Returns the MAC as lowercase hex.
pub fn sign_record(record: &TraceRecord, key: &str) -> Result<String, SignatureError> {
    let mut mac = new_mac(key)?;
    mac.update(signing_message(record).as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify a record's signature against a shared secret.
///
/// Total: malformed signatures or keys yield `false`.
pub fn verify_signature(record: &TraceRecord, key: &str) -> bool {
    let Ok(expected) = hex::decode(&record.signature) else {
        tracing::debug!(record_id = %record.id, "signature is not valid hex");
        return false;
    };
    let Ok(mut mac) = new_mac(key) else {
        return false;
    };
    mac.update(signing_message(record).as_bytes());
    mac.verify_slice(&expected).is_ok()
}

fn new_mac(key: &str) -> Result<HmacSha256, SignatureError> {
    HmacSha256::new_from_slice(key.as_bytes()).map_err(|_| SignatureError::InvalidKey)
}

/// Errors from signing operations.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("invalid key")]
    InvalidKey,
    #[error("unknown signature scheme: {0}")]
    UnknownScheme(String),
}
