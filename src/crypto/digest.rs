//! SHA-512 integrity stamps and the hex encoding used by the key artifacts.
//!
//! The digest is only ever used to prove possession of a key: the remote
//! drive stores `SHA-512(key)` for every key in the bundle, never the key.

use sha2::{Digest as _, Sha512};

/// Width of a digest in bytes (SHA-512 = 64 bytes).
pub const DIGEST_LEN: usize = 64;

/// A fixed-width one-way digest.
pub type FixedDigest = [u8; DIGEST_LEN];

/// Compute the SHA-512 digest of `bytes`.
///
/// Deterministic and infallible; an empty slice yields the digest of the
/// empty sequence.
pub fn digest(bytes: &[u8]) -> FixedDigest {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha512::digest(bytes));
    out
}

/// Encode bytes as lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode canonical lowercase hex, the exact form `to_hex` writes.
///
/// Uppercase digits, whitespace, or any other byte yield `None`, so a
/// stored entry has exactly one accepted spelling.
pub fn from_hex(text: &str) -> Option<Vec<u8>> {
    if !text.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return None;
    }
    hex::decode(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_known_digest() {
        // SHA-512 of the empty string.
        let expected = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                        47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";
        assert_eq!(to_hex(&digest(b"")), expected);
    }

    #[test]
    fn from_hex_accepts_lowercase_only() {
        assert_eq!(from_hex("deadbeef"), Some(vec![0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(from_hex("DEADbeef"), None);
        assert_eq!(from_hex("deadbeef "), None);
        assert_eq!(from_hex(" deadbeef"), None);
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert_eq!(from_hex("xyz"), None);
        assert_eq!(from_hex("abc"), None);
    }
}
