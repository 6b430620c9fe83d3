//! Vault module — encrypted record storage.
//!
//! This module provides:
//! - The record codec and shape heuristic (`record`)
//! - File naming and listing conventions for the vault directory (`layout`)
//! - The `VaultStore` session context that gates every record operation (`store`)

pub mod layout;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use layout::{RecordEntry, DIGEST_FILE_NAME, RECORD_SUFFIX};
pub use record::{classify, decode_record, encode_record, Record};
pub use store::{Provisioning, VaultPaths, VaultStore};
