//! BLAKE3 fingerprints for artifact staleness detection
//!
//! Fingerprinting and the staleness rule are pure: they work on bytes already
//! in memory, so the decision "does the target need rewriting" can be tested
//! without touching a filesystem.

use std::fmt;

use blake3::Hasher;

/// Hash prefix for BLAKE3 fingerprints
pub const HASH_PREFIX: &str = "blake3:";

/// Digest of an artifact body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint(blake3::Hash);

impl Fingerprint {
    /// Fingerprint a complete artifact body
    pub fn of(body: &[u8]) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(body);
        Self(hasher.finalize())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", HASH_PREFIX, self.0.to_hex())
    }
}

/// Decide whether the target must be rewritten
///
/// `current` is the fingerprint of the target as it exists on disk, or
/// `None` when there is no target yet.
pub fn is_stale(current: Option<&Fingerprint>, candidate: &Fingerprint) -> bool {
    current != Some(candidate)
}
