use scl_types::TraceRecord;

use crate::hasher::validate_record;

/// Hash chain integrity verifier.
///
/// Structural check only: hashes and links, never signatures. Accepts any
/// record set; callers that want one product's chain filter first.
pub struct ChainVerifier;

impl ChainVerifier {
    /// Verify a record set as a single chain.
    ///
    /// Records are stable-sorted by timestamp, then:
    /// 1. every record's hash must match its payload, the first record's
    ///    included
    /// 2. each record's `previous_hash` must equal its predecessor's `hash`
    ///
    /// A tampered first record therefore fails with index 0. Its
    /// `previous_hash` is not required to be the genesis sentinel. Indices in errors refer to the sorted order.
    pub fn verify(records: &[TraceRecord]) -> Result<(), ChainError> {
        if records.is_empty() {
            return Ok(());
        }

        let sorted = Self::sorted_by_timestamp(records);

        if !validate_record(sorted[0]) {
            return Err(ChainError::InvalidRecord {
                index: 0,
                id: sorted[0].id.clone(),
            });
        }

        for (index, pair) in sorted.windows(2).enumerate() {
            let (previous, current) = (pair[0], pair[1]);
            let index = index + 1;

            if !validate_record(current) {
                return Err(ChainError::InvalidRecord {
                    index,
                    id: current.id.clone(),
                });
            }

            if current.previous_hash != previous.hash {
                return Err(ChainError::BrokenLink {
                    index,
                    previous_id: previous.id.clone(),
                    current_id: current.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Stable ascending sort by timestamp.
    pub fn sorted_by_timestamp(records: &[TraceRecord]) -> Vec<&TraceRecord> {
        let mut sorted: Vec<&TraceRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.timestamp);
        sorted
    }
}

/// Boolean form of [`ChainVerifier::verify`] that logs the failure point.
pub fn validate_chain(records: &[TraceRecord]) -> bool {
    match ChainVerifier::verify(records) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "chain validation failed");
            false
        }
    }
}

/// Errors from chain verification.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("invalid hash for record {id} at index {index}")]
    InvalidRecord { index: usize, id: String },

    #[error("chain break between {previous_id} and {current_id} (index {index})")]
    BrokenLink {
        index: usize,
        previous_id: String,
        current_id: String,
    },
}
