//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` is the explicit session context: it is only constructed
//! after the integrity gate has passed, and it carries the verified
//! bundle and the vault directory for every record operation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto::keys::KeyBundle;
use crate::errors::{Result, SafeZoneError};
use crate::keystore::artifact::restrict_permissions;
use crate::keystore::{self, Outcome};

use super::layout::{self, RecordEntry};
use super::record::{decode_record, Record};

/// Where the two halves of the key material and the records live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultPaths {
    /// Local key artifact (raw keys).
    pub keys_file: PathBuf,
    /// Mounted directory holding records and the digest artifact.
    pub vault_dir: PathBuf,
}

impl VaultPaths {
    pub fn new(keys_file: impl Into<PathBuf>, vault_dir: impl Into<PathBuf>) -> Self {
        Self {
            keys_file: keys_file.into(),
            vault_dir: vault_dir.into(),
        }
    }

    /// Path of the remote digest artifact.
    pub fn digest_file(&self) -> PathBuf {
        layout::digest_path(&self.vault_dir)
    }

    /// Run the verifier without generating anything.
    pub fn verify(&self) -> Result<Outcome> {
        self.ensure_vault_dir()?;
        keystore::verify(&self.keys_file, &self.digest_file())
    }

    /// The vault directory must already exist; it is never created here.
    fn ensure_vault_dir(&self) -> Result<()> {
        if self.vault_dir.is_dir() {
            Ok(())
        } else {
            Err(SafeZoneError::VaultDirMissing(self.vault_dir.clone()))
        }
    }
}

/// How `VaultStore::open` obtained its key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioning {
    /// No key material existed; a new bundle was generated.
    Generated,
    /// Existing key material passed verification.
    Verified,
}

/// The main vault handle.
pub struct VaultStore {
    vault_dir: PathBuf,
    bundle: KeyBundle,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Run the startup gate and open the vault.
    ///
    /// - absent key material → generate a bundle
    /// - valid → use the verified bundle
    /// - anything else → typed error, no recovery
    pub fn open(paths: &VaultPaths) -> Result<(Self, Provisioning)> {
        let (bundle, provisioning) = match paths.verify()?.into_result()? {
            Some(bundle) => (bundle, Provisioning::Verified),
            None => {
                let bundle = keystore::generate(&paths.keys_file, &paths.digest_file())?;
                (bundle, Provisioning::Generated)
            }
        };

        Ok((
            Self {
                vault_dir: paths.vault_dir.clone(),
                bundle,
            },
            provisioning,
        ))
    }

    /// Replace both artifacts with a brand-new bundle.
    ///
    /// Records written under the old bundle can no longer be decrypted.
    pub fn reset(paths: &VaultPaths) -> Result<Self> {
        paths.ensure_vault_dir()?;
        let bundle = keystore::generate(&paths.keys_file, &paths.digest_file())?;
        Ok(Self {
            vault_dir: paths.vault_dir.clone(),
            bundle,
        })
    }

    // ------------------------------------------------------------------
    // Record operations
    // ------------------------------------------------------------------

    /// Encrypt `record` with the bundle's first key and store it as `label`.
    ///
    /// Refuses to replace an existing record unless `overwrite` is set.
    pub fn write_record(&self, label: &str, record: &Record, overwrite: bool) -> Result<()> {
        layout::validate_label(label)?;
        let path = layout::record_path(&self.vault_dir, label);

        if !overwrite && path.exists() {
            return Err(SafeZoneError::RecordAlreadyExists(label.to_string()));
        }

        let ciphertext = record.encode(self.bundle.primary().as_bytes())?;

        // Atomic write: temp file in the same directory, then rename.
        let tmp_path = self.vault_dir.join(format!(".{label}.tmp"));
        fs::write(&tmp_path, &ciphertext)?;
        restrict_permissions(&tmp_path)?;
        fs::rename(&tmp_path, &path)?;

        Ok(())
    }

    /// Read and decode the record stored as `label`.
    pub fn read_record(&self, label: &str) -> Result<Record> {
        let path = self.existing_record_path(label)?;
        let ciphertext = fs::read(&path)?;
        decode_record(&ciphertext, self.bundle.primary().as_bytes())
    }

    /// Remove the record stored as `label`.
    pub fn delete_record(&self, label: &str) -> Result<()> {
        let path = self.existing_record_path(label)?;
        fs::remove_file(path)?;
        Ok(())
    }

    /// List all records, sorted by label.
    pub fn list_records(&self) -> Result<Vec<RecordEntry>> {
        layout::list_records(&self.vault_dir)
    }

    /// Returns `true` if a record with this label exists.
    pub fn contains(&self, label: &str) -> bool {
        layout::validate_label(label).is_ok()
            && layout::record_path(&self.vault_dir, label).is_file()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the vault directory.
    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    /// Returns the verified key bundle.
    pub fn bundle(&self) -> &KeyBundle {
        &self.bundle
    }

    fn existing_record_path(&self, label: &str) -> Result<PathBuf> {
        layout::validate_label(label)?;
        let path = layout::record_path(&self.vault_dir, label);
        if !path.is_file() {
            return Err(SafeZoneError::RecordNotFound(label.to_string()));
        }
        Ok(path)
    }
}
