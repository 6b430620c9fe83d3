//! Cryptographic primitives for SafeZone.
//!
//! This module provides:
//! - SHA-512 integrity stamps and hex helpers (`digest`)
//! - AES-256 independent-block encryption and zero padding (`cipher`)
//! - Secret keys and the three-key bundle (`keys`)

pub mod cipher;
pub mod digest;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{digest, encrypt_blocks, KeyBundle, ...};
pub use cipher::{decrypt_blocks, encrypt_blocks, pad_zero, strip_zero_padding};
pub use digest::{digest, FixedDigest};
pub use keys::{KeyBundle, SecretKey};
