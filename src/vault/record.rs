//! Record codec: one record's plaintext in, raw ciphertext out, and back.
//!
//! Records carry no header, length prefix, or shape marker. The shape is
//! re-derived from the decrypted text:
//!
//! - exactly one `:` and no newline → credential (`user:password`)
//! - anything else → free-form note, kept verbatim
//!
//! Raw plaintext such as `Meeting: 3pm` therefore reads back as a
//! credential. That ambiguity is part of the format. Notes built with
//! `Record::note` end every line with `\n`, so they never hit it.

use serde::Serialize;

use crate::crypto::cipher::{decrypt_blocks, encrypt_blocks, pad_zero, strip_zero_padding};
use crate::errors::{Result, SafeZoneError};

/// Separator between user and password in a credential record.
pub const SEPARATOR: char = ':';

/// A decoded record with its recovered shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    /// A `user:password` pair.
    Credential { user: String, password: String },
    /// Free-form text, exactly as decoded.
    Note { text: String },
    /// The record file exists but holds zero bytes.
    Empty,
}

impl Record {
    /// Build a credential, rejecting values that would not decode back to
    /// the same shape.
    pub fn credential(user: &str, password: &str) -> Result<Self> {
        if user.is_empty() {
            return Err(SafeZoneError::InvalidRecord("user cannot be empty".into()));
        }
        for (field, value) in [("user", user), ("password", password)] {
            if value.contains(SEPARATOR) {
                return Err(SafeZoneError::InvalidRecord(format!(
                    "{field} cannot contain '{SEPARATOR}'"
                )));
            }
            if value.contains('\n') || value.contains('\r') {
                return Err(SafeZoneError::InvalidRecord(format!(
                    "{field} cannot contain a line break"
                )));
            }
        }
        Ok(Self::Credential {
            user: user.to_string(),
            password: password.to_string(),
        })
    }

    /// Build a note from its lines.
    pub fn note<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut text = String::new();
        for line in lines {
            let line: String = line.into();
            if line.contains('\n') {
                return Err(SafeZoneError::InvalidRecord(
                    "note lines cannot contain embedded newlines".into(),
                ));
            }
            text.push_str(&line);
            text.push('\n');
        }
        Ok(Self::Note { text })
    }

    /// The plaintext this record encodes to.
    pub fn to_plaintext(&self) -> String {
        match self {
            Self::Credential { user, password } => format!("{user}{SEPARATOR}{password}"),
            Self::Note { text } => text.clone(),
            Self::Empty => String::new(),
        }
    }

    /// Encrypt this record under `key`.
    pub fn encode(&self, key: &[u8]) -> Result<Vec<u8>> {
        encode_record(&self.to_plaintext(), key)
    }

    /// The shape this record will have after a store and load.
    ///
    /// Differs from `self` only when the plaintext is ambiguous, e.g. an
    /// empty note, which is stored as a zero-length file.
    pub fn read_back(&self) -> Record {
        let plaintext = self.to_plaintext();
        // Trailing NULs are indistinguishable from padding.
        let text = plaintext.trim_end_matches('\0');
        if text.is_empty() {
            Record::Empty
        } else {
            classify(text)
        }
    }

    /// Short shape name for display and audit details.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Credential { .. } => "credential",
            Self::Note { .. } => "note",
            Self::Empty => "empty",
        }
    }
}

/// Pad and encrypt `plaintext`, returning bytes ready to store as a file.
pub fn encode_record(plaintext: &str, key: &[u8]) -> Result<Vec<u8>> {
    encrypt_blocks(key, &pad_zero(plaintext.as_bytes()))
}

/// Decrypt a record file's bytes and classify the result.
///
/// Zero-length input yields `Record::Empty` without touching the cipher.
pub fn decode_record(ciphertext: &[u8], key: &[u8]) -> Result<Record> {
    if ciphertext.is_empty() {
        return Ok(Record::Empty);
    }

    let plaintext = strip_zero_padding(decrypt_blocks(key, ciphertext)?);
    let text = String::from_utf8(plaintext).map_err(|_| SafeZoneError::DecryptionFailed)?;

    Ok(classify(&text))
}

/// Derive a record's shape from its decoded text.
pub fn classify(text: &str) -> Record {
    if text.matches(SEPARATOR).count() == 1 && !text.contains('\n') {
        if let Some((user, password)) = text.split_once(SEPARATOR) {
            return Record::Credential {
                user: user.to_string(),
                password: password.to_string(),
            };
        }
    }

    Record::Note {
        text: text.to_string(),
    }
}
