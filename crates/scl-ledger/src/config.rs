use std::path::Path;

use scl_crypto::SignatureScheme;
use scl_types::TraceMetadata;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Ledger settings. Every field has a default, so a partial TOML file is
/// valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// `TraceMetadata.version` stamped on created records.
    pub version: String,
    /// `TraceMetadata.schemaVersion` stamped on created records.
    pub schema_version: String,
    pub network_id: String,
    /// Fail creation when `previous_record_id` is unknown instead of
    /// starting a new chain.
    pub strict_predecessor: bool,
    pub signature_scheme: SignatureScheme,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".into(),
            schema_version: "1.0.0".into(),
            network_id: "supply-chain-network".into(),
            strict_predecessor: false,
            signature_scheme: SignatureScheme::HmacSha256,
        }
    }
}

impl LedgerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, LedgerError> {
        toml::from_str(s).map_err(|e| LedgerError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Metadata for a record authored by `peer_id`.
    pub fn metadata_for(&self, peer_id: &str) -> TraceMetadata {
        TraceMetadata {
            version: self.version.clone(),
            schema_version: self.schema_version.clone(),
            network_id: self.network_id.clone(),
            peer_id: peer_id.to_string(),
            parent_records: None,
            child_records: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = LedgerConfig::default();
        assert_eq!(c.version, "1.0.0");
        assert_eq!(c.schema_version, "1.0.0");
        assert_eq!(c.network_id, "supply-chain-network");
        assert!(!c.strict_predecessor);
        assert_eq!(c.signature_scheme, SignatureScheme::HmacSha256);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = LedgerConfig::from_toml_str(
            r#"
            network_id = "orchard-coop"
            strict_predecessor = true
            "#,
        )
        .unwrap();
        assert_eq!(c.network_id, "orchard-coop");
        assert!(c.strict_predecessor);
        assert_eq!(c.version, "1.0.0");
    }

    #[test]
    fn scheme_from_toml() {
        let c = LedgerConfig::from_toml_str(r#"signature_scheme = "ed25519""#).unwrap();
        assert_eq!(c.signature_scheme, SignatureScheme::Ed25519);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = LedgerConfig::from_toml_str("strict_predecessor = \"maybe\"").unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "schema_version = \"2.0.0\"").unwrap();
        let c = LedgerConfig::load(file.path()).unwrap();
        assert_eq!(c.schema_version, "2.0.0");
    }

    #[test]
    fn load_missing_file_fails() {
        let err = LedgerConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn metadata_uses_peer_id() {
        let meta = LedgerConfig::default().metadata_for("actor-9");
        assert_eq!(meta.peer_id, "actor-9");
        assert_eq!(meta.network_id, "supply-chain-network");
        assert!(meta.parent_records.is_none());
    }
}
