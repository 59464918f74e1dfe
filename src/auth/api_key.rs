//! Shared API key validation.

use std::sync::Arc;

use sha2::{Digest, Sha256};

/// Validates presented keys against the configured shared secret.
///
/// Only the SHA-256 digest of the secret is kept in memory.
#[derive(Clone)]
pub struct ApiKeyGate {
    secret_hash: Arc<str>,
}

impl ApiKeyGate {
    /// Create a gate for the configured secret.
    pub fn new(secret: &str) -> Self {
        Self {
            secret_hash: Self::hash_key(secret).into(),
        }
    }

    /// Hash an API key for comparison.
    pub fn hash_key(key: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Check a presented key. Equal digests mean byte-for-byte equal keys.
    pub fn verify(&self, key: &str) -> bool {
        Self::hash_key(key) == *self.secret_hash
    }
}

impl std::fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_verification() {
        let gate = ApiKeyGate::new("sk-print-12345");

        assert!(gate.verify("sk-print-12345"));
        assert!(!gate.verify("wrong-key"));
        assert!(!gate.verify(""));
    }

    #[test]
    fn test_comparison_is_exact() {
        let gate = ApiKeyGate::new("Secret");

        assert!(!gate.verify("secret"));
        assert!(!gate.verify("Secret "));
        assert!(!gate.verify(" Secret"));
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let hashed = ApiKeyGate::hash_key("abc");
        assert_eq!(
            hashed,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
