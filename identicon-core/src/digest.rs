//! Digest Stage - MD5 for Seeds, SHA-256 for Artifacts
//!
//! The seed digest drives every later stage. SHA-256 is only used to
//! fingerprint the encoded PNG in reports.

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::pipeline::PipelineError;

/// Number of digest bytes kept: MD5's 16 minus the last one, so the
/// sequence splits evenly into rows of three.
pub const DIGEST_LEN: usize = 15;

/// The 15 leading bytes of the seed's MD5 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hash the raw bytes of `seed` and drop the final digest byte.
    pub fn of(seed: &str) -> Self {
        let full = Md5::digest(seed.as_bytes());
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&full[..DIGEST_LEN]);
        Self(bytes)
    }

    /// Build a digest from an existing byte sequence of exactly 15 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PipelineError> {
        let array: [u8; DIGEST_LEN] =
            bytes.try_into().map_err(|_| PipelineError::MalformedDigest {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}
