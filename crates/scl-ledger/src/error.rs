use scl_crypto::SignatureError;

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger not initialized: call initialize() with an actor and key first")]
    Uninitialized,

    #[error("validation failed for record {id}: {reason}")]
    ValidationFailure { id: String, reason: String },

    #[error("failed to persist record: {0}")]
    PersistenceFailure(String),

    #[error("malformed record: {0}")]
    MalformedInput(String),

    #[error("previous record not found: {0}")]
    UnknownPredecessor(String),

    #[error("signing error: {0}")]
    Signing(#[from] SignatureError),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("ledger lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signing_errors_convert_and_clone() {
        let err: LedgerError = SignatureError::UnknownScheme("rot13".into()).into();
        let copy = err.clone();
        assert_eq!(copy, err);
        assert!(matches!(copy, LedgerError::Signing(SignatureError::UnknownScheme(_))));
        assert!(err.to_string().contains("rot13"));
    }
}
