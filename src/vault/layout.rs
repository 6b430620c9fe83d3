//! Vault directory conventions.
//!
//! A record named `github` lives at `<vault_dir>/github.key`. The remote
//! digest artifact shares the directory under the reserved name
//! `master.key` and is never listed or treated as a record.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, SafeZoneError};

/// Suffix appended to every record label.
pub const RECORD_SUFFIX: &str = ".key";

/// Reserved file name of the remote digest artifact.
pub const DIGEST_FILE_NAME: &str = "master.key";

/// Maximum label length in bytes.
const MAX_LABEL_LEN: usize = 200;

/// A record file found in the vault directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    /// The user-chosen label (file name without suffix).
    pub label: String,
    /// Ciphertext size in bytes.
    pub size: u64,
}

/// Path of the remote digest artifact inside `vault_dir`.
pub fn digest_path(vault_dir: &Path) -> PathBuf {
    vault_dir.join(DIGEST_FILE_NAME)
}

/// Path of the record file for `label`. The label must already be valid.
pub fn record_path(vault_dir: &Path, label: &str) -> PathBuf {
    vault_dir.join(format!("{label}{RECORD_SUFFIX}"))
}

/// Validate that a label is safe to use as a file name.
///
/// Rejects empty labels, path separators, NUL, `.`/`..`, leading dots
/// (hidden and temp files), and the label that would collide with the
/// digest artifact.
pub fn validate_label(label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(SafeZoneError::InvalidLabel("label cannot be empty".into()));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(SafeZoneError::InvalidLabel(format!(
            "label cannot exceed {MAX_LABEL_LEN} bytes"
        )));
    }
    if label.starts_with('.') {
        return Err(SafeZoneError::InvalidLabel(format!(
            "'{label}' cannot start with a dot"
        )));
    }
    if label.chars().any(|c| c == '/' || c == '\\' || c.is_control()) {
        return Err(SafeZoneError::InvalidLabel(format!(
            "'{label}' contains a path separator or control character"
        )));
    }
    if format!("{label}{RECORD_SUFFIX}") == DIGEST_FILE_NAME {
        return Err(SafeZoneError::InvalidLabel(format!(
            "'{label}' is reserved for the digest file"
        )));
    }
    Ok(())
}

/// List every record in `vault_dir`, sorted by label.
///
/// Only regular files with the record suffix count; the digest artifact,
/// hidden files, and anything else in the directory are skipped.
pub fn list_records(vault_dir: &Path) -> Result<Vec<RecordEntry>> {
    let mut records = Vec::new();

    for entry in fs::read_dir(vault_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name == DIGEST_FILE_NAME {
            continue;
        }
        let Some(label) = name.strip_suffix(RECORD_SUFFIX) else {
            continue;
        };
        if validate_label(label).is_err() {
            continue;
        }

        records.push(RecordEntry {
            label: label.to_string(),
            size: entry.metadata()?.len(),
        });
    }

    records.sort_by(|a, b| a.label.cmp(&b.label));
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn record_path_appends_suffix() {
        assert_eq!(
            record_path(Path::new("/mnt/safezone"), "github"),
            PathBuf::from("/mnt/safezone/github.key")
        );
    }

    #[test]
    fn valid_labels() {
        assert!(validate_label("github").is_ok());
        assert!(validate_label("bank account").is_ok());
        assert!(validate_label("wifi-home_2").is_ok());
        assert!(validate_label("masterplan").is_ok());
    }

    #[test]
    fn rejects_bad_labels() {
        assert!(validate_label("").is_err());
        assert!(validate_label("../etc/passwd").is_err());
        assert!(validate_label("a/b").is_err());
        assert!(validate_label(".hidden").is_err());
        assert!(validate_label("..").is_err());
        assert!(validate_label("tab\there").is_err());
        assert!(validate_label(&"x".repeat(201)).is_err());
    }

    #[test]
    fn rejects_reserved_label() {
        let err = validate_label("master").unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn list_excludes_digest_and_foreign_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("zeta.key"), [0u8; 16]).unwrap();
        fs::write(dir.path().join("alpha.key"), [0u8; 32]).unwrap();
        fs::write(dir.path().join(DIGEST_FILE_NAME), "00\n").unwrap();
        fs::write(dir.path().join("audit.db"), "").unwrap();
        fs::write(dir.path().join(".alpha.key.tmp"), "").unwrap();
        fs::create_dir(dir.path().join("dir.key")).unwrap();

        let records = list_records(dir.path()).unwrap();
        assert_eq!(
            records,
            vec![
                RecordEntry {
                    label: "alpha".into(),
                    size: 32
                },
                RecordEntry {
                    label: "zeta".into(),
                    size: 16
                },
            ]
        );
    }
}
