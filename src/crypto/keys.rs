//! Key material: single 256-bit keys and the three-key bundle.
//!
//! A `KeyBundle` is trusted only as a whole. All three keys are digested
//! and verified against the removable drive, but only the first one ever
//! encrypts records; the other two widen the proof-of-possession check
//! without widening cryptographic use.

use rand::RngCore;
use zeroize::Zeroize;

use super::cipher::KEY_LEN;
use super::digest::{digest, FixedDigest};

/// Number of keys in a bundle.
pub const BUNDLE_SIZE: usize = 3;

/// A 32-byte secret key that zeroes its memory when dropped.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretKey {
    bytes: [u8; KEY_LEN],
}

impl SecretKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Draw a fresh key from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Build a key from a slice, returning `None` unless it is exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; KEY_LEN] = slice.try_into().ok()?;
        Some(Self { bytes })
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// The integrity stamp stored on the removable drive for this key.
    pub fn digest(&self) -> FixedDigest {
        digest(&self.bytes)
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Three independent keys generated together.
#[derive(Clone, Debug)]
pub struct KeyBundle {
    keys: [SecretKey; BUNDLE_SIZE],
}

impl KeyBundle {
    /// Assemble a bundle from already-loaded keys.
    pub fn new(keys: [SecretKey; BUNDLE_SIZE]) -> Self {
        Self { keys }
    }

    /// Generate a brand-new, unrelated bundle.
    pub fn generate() -> Self {
        Self {
            keys: [
                SecretKey::generate(),
                SecretKey::generate(),
                SecretKey::generate(),
            ],
        }
    }

    /// The key that encrypts records.
    pub fn primary(&self) -> &SecretKey {
        &self.keys[0]
    }

    /// All keys, in generation order.
    pub fn keys(&self) -> &[SecretKey; BUNDLE_SIZE] {
        &self.keys
    }

    /// The digest of every key, in the same order.
    pub fn digests(&self) -> [FixedDigest; BUNDLE_SIZE] {
        [
            self.keys[0].digest(),
            self.keys[1].digest(),
            self.keys[2].digest(),
        ]
    }
}
