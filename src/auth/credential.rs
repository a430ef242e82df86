use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// Salted SHA-256 digest of a principal's password.
///
/// Never serialized; the only operation is `verify`.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash {
    salt: String,
    digest: String,
}

impl CredentialHash {
    pub fn new(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest(&salt, password);
        Self { salt, digest }
    }

    pub fn verify(&self, candidate: &str) -> bool {
        let candidate = Self::digest(&self.salt, candidate);
        // Compare every byte regardless of where the first mismatch is
        candidate.len() == self.digest.len()
            && candidate
                .bytes()
                .zip(self.digest.bytes())
                .fold(0u8, |acc, (a, b)| acc | (a ^ b))
                == 0
    }

    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(b":");
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialHash(..)")
    }
}
