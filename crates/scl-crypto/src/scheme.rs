use std::fmt;
use std::str::FromStr;

use scl_types::TraceRecord;
use serde::{Deserialize, Serialize};

use crate::ed25519;
use crate::hasher::CanonicalHasher;
use crate::signer::{self, SignatureError};

/// Which signature scheme a ledger signs and verifies with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureScheme {
    /// Symmetric HMAC-SHA256, compatible with existing network data.
    #[default]
    #[serde(rename = "hmac-sha256")]
    HmacSha256,
    /// Asymmetric Ed25519.
    #[serde(rename = "ed25519")]
    Ed25519,
}

impl SignatureScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureScheme::HmacSha256 => "hmac-sha256",
            SignatureScheme::Ed25519 => "ed25519",
        }
    }

    /// Verify `record.signature` under this scheme. For HMAC `key` is the
    /// shared secret; for Ed25519 it is the signer's public key.
    pub fn verify(&self, record: &TraceRecord, key: &str) -> bool {
        match self {
            SignatureScheme::HmacSha256 => signer::verify_signature(record, key),
            SignatureScheme::Ed25519 => ed25519::verify_signature_ed25519(record, key),
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureScheme {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hmac-sha256" => Ok(SignatureScheme::HmacSha256),
            "ed25519" => Ok(SignatureScheme::Ed25519),
            other => Err(SignatureError::UnknownScheme(other.to_string())),
        }
    }
}

/// Key material bound to a scheme, ready to sign records.
pub enum RecordSigner {
    Hmac { secret: String },
    Ed25519(ed25519_dalek::SigningKey),
}

impl RecordSigner {
    /// Build a signer from caller-supplied private key text.
    pub fn new(scheme: SignatureScheme, private_key: &str) -> Result<Self, SignatureError> {
        match scheme {
            SignatureScheme::HmacSha256 => Ok(RecordSigner::Hmac {
                secret: private_key.to_string(),
            }),
            SignatureScheme::Ed25519 => {
                ed25519::signing_key_from_hex(private_key).map(RecordSigner::Ed25519)
            }
        }
    }

    pub fn scheme(&self) -> SignatureScheme {
        match self {
            RecordSigner::Hmac { .. } => SignatureScheme::HmacSha256,
            RecordSigner::Ed25519(_) => SignatureScheme::Ed25519,
        }
    }

    pub fn sign(&self, record: &TraceRecord) -> Result<String, SignatureError> {
        match self {
            RecordSigner::Hmac { secret } => signer::sign_record(record, secret),
            RecordSigner::Ed25519(key) => Ok(ed25519::sign_record_with(key, record)),
        }
    }

    /// Check a signature this signer would have produced.
    pub fn verify(&self, record: &TraceRecord) -> bool {
        match self {
            RecordSigner::Hmac { secret } => signer::verify_signature(record, secret),
            RecordSigner::Ed25519(key) => {
                let public = hex::encode(key.verifying_key().to_bytes());
                ed25519::verify_signature_ed25519(record, &public)
            }
        }
    }

    /// The public name of this key: the secret's SHA-256 for HMAC, the
    /// verifying key for Ed25519.
    pub fn public_key(&self) -> String {
        match self {
            RecordSigner::Hmac { secret } => CanonicalHasher::sha256_hex(secret.as_bytes()),
            RecordSigner::Ed25519(key) => hex::encode(key.verifying_key().to_bytes()),
        }
    }
}

impl fmt::Debug for RecordSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordSigner({}, <redacted>)", self.scheme())
    }
}
