use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::hasher::CanonicalHasher;

/// A named key pair, hex-encoded.
///
/// For the HMAC scheme this is a naming convention only: `public_key` is
/// the SHA-256 of `private_key` and cannot verify anything on its own.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Generate an HMAC-scheme key pair: 256 random bits as the private key,
/// its SHA-256 as the public key.
pub fn generate_key_pair() -> KeyPair {
    let private_key = random_hex::<32>();
    let public_key = CanonicalHasher::sha256_hex(private_key.as_bytes());
    KeyPair {
        public_key,
        private_key,
    }
}

/// Generate an Ed25519 key pair.
pub fn generate_ed25519_key_pair() -> KeyPair {
    let mut csprng = rand::thread_rng();
    let key = ed25519_dalek::SigningKey::generate(&mut csprng);
    KeyPair {
        public_key: hex::encode(key.verifying_key().to_bytes()),
        private_key: hex::encode(key.to_bytes()),
    }
}

/// 128 bits of secure randomness as 32 hex characters.
pub fn generate_secure_id() -> String {
    random_hex::<16>()
}

fn random_hex<const N: usize>() -> String {
    let mut bytes = [0u8; N];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
