//! Ed25519 record signatures.
//!
//! Opt-in asymmetric scheme over the same `hash:timestamp:actor_id`
//! message as the HMAC scheme. Private keys sign; anyone holding the
//! public key verifies. Keys and signatures are lowercase hex.

use ed25519_dalek::{Signer, Verifier};
use scl_types::TraceRecord;

use crate::signer::{signing_message, SignatureError};

/// Parse a hex-encoded 32-byte secret.
pub fn signing_key_from_hex(private_key: &str) -> Result<ed25519_dalek::SigningKey, SignatureError> {
    let bytes = decode_32(private_key)?;
    Ok(ed25519_dalek::SigningKey::from_bytes(&bytes))
}

/// Parse a hex-encoded 32-byte public key.
pub fn verifying_key_from_hex(public_key: &str) -> Result<ed25519_dalek::VerifyingKey, SignatureError> {
    let bytes = decode_32(public_key)?;
    ed25519_dalek::VerifyingKey::from_bytes(&bytes).map_err(|_| SignatureError::InvalidKey)
}

/// Sign a record with an Ed25519 signing key.
pub fn sign_record_with(key: &ed25519_dalek::SigningKey, record: &TraceRecord) -> String {
    hex::encode(key.sign(signing_message(record).as_bytes()).to_bytes())
}

/// Sign a record with a hex-encoded Ed25519 secret.
pub fn sign_record_ed25519(record: &TraceRecord, private_key: &str) -> Result<String, SignatureError> {
    let key = signing_key_from_hex(private_key)?;
    Ok(sign_record_with(&key, record))
}

/// Verify an Ed25519 record signature against a hex-encoded public key.
///
/// Total: malformed keys or signatures yield `false`.
pub fn verify_signature_ed25519(record: &TraceRecord, public_key: &str) -> bool {
    let Ok(key) = verifying_key_from_hex(public_key) else {
        return false;
    };
    let Ok(bytes) = hex::decode(&record.signature) else {
        return false;
    };
    let Ok(bytes) = <[u8; 64]>::try_from(bytes.as_slice()) else {
        return false;
    };
    let signature = ed25519_dalek::Signature::from_bytes(&bytes);
    key.verify(signing_message(record).as_bytes(), &signature).is_ok()
}

fn decode_32(s: &str) -> Result<[u8; 32], SignatureError> {
    let bytes = hex::decode(s).map_err(|_| SignatureError::InvalidKey)?;
    bytes.try_into().map_err(|_| SignatureError::InvalidKey)
}
