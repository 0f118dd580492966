use scl_types::{HashInput, TraceRecord};
use sha2::{Digest, Sha256};

/// Canonical SHA-256 hasher for trace records.
///
/// The canonical payload is the compact JSON encoding of [`HashInput`]:
/// fields in declaration order, camelCase names, absent optionals omitted,
/// and map keys sorted. The digest is rendered as lowercase hex. This
/// encoding is the only bit-exact contract between nodes.
pub struct CanonicalHasher;

impl CanonicalHasher {
    /// Encode the canonical payload.
    pub fn canonical_bytes(input: &HashInput<'_>) -> Result<Vec<u8>, HasherError> {
        serde_json::to_vec(input).map_err(|e| HasherError::Serialization(e.to_string()))
    }

    /// Hash the canonical payload.
    pub fn hash(input: &HashInput<'_>) -> Result<String, HasherError> {
        let data = Self::canonical_bytes(input)?;
        Ok(Self::sha256_hex(&data))
    }

    /// Hash a record's own payload, ignoring its stored `hash` and `signature`.
    pub fn hash_record(record: &TraceRecord) -> Result<String, HasherError> {
        Self::hash(&record.hash_input())
    }

    /// Check that a record's stored hash matches its payload.
    ///
    /// Total: any failure to encode counts as a mismatch.
    pub fn verify(record: &TraceRecord) -> bool {
        match Self::hash_record(record) {
            Ok(computed) => computed == record.hash,
            Err(err) => {
                tracing::debug!(record_id = %record.id, error = %err, "record could not be hashed");
                false
            }
        }
    }

    /// Raw SHA-256 of arbitrary bytes, lowercase hex.
    pub fn sha256_hex(data: &[u8]) -> String {
        hex::encode(Sha256::digest(data))
    }
}

/// Compute the canonical hash of a record payload.
pub fn canonical_hash(input: &HashInput<'_>) -> Result<String, HasherError> {
    CanonicalHasher::hash(input)
}

/// Returns `true` if `record.hash` is the canonical hash of its payload.
pub fn validate_record(record: &TraceRecord) -> bool {
    CanonicalHasher::verify(record)
}

/// Errors from hashing operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HasherError {
    #[error("serialization error: {0}")]
    Serialization(String),
}
