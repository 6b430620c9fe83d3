//! Cross-location integrity verification.
//!
//! Decides, before any key is trusted, whether the key material is
//! absent (first run), present and consistent, or in any other state.
//! Every state other than the first two is fatal: there is no partial
//! trust and no auto-repair.

use std::path::Path;

use subtle::ConstantTimeEq;

use crate::crypto::cipher::KEY_LEN;
use crate::crypto::digest::DIGEST_LEN;
use crate::crypto::keys::{KeyBundle, SecretKey, BUNDLE_SIZE};
use crate::errors::{Result, SafeZoneError};

use super::artifact::{malformed, read_entries, ArtifactKind};

/// Result of checking the two artifacts against each other.
#[derive(Debug)]
pub enum Outcome {
    /// Neither artifact exists. The caller should generate a bundle.
    Absent,
    /// Both artifacts exist and every digest matches. Carries the verified bundle.
    Valid(KeyBundle),
    /// Anything else. Always fatal to the session.
    Invalid(IntegrityFailure),
}

/// Why verification refused the key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityFailure {
    /// Exactly one of the two artifacts exists.
    PartialKeyMaterial { missing: ArtifactKind },
    /// An artifact does not hold exactly three well-formed entries.
    MalformedArtifact { artifact: ArtifactKind, reason: String },
    /// Both artifacts are well formed but these positions disagree.
    IntegrityMismatch { positions: Vec<usize> },
}

impl From<IntegrityFailure> for SafeZoneError {
    fn from(failure: IntegrityFailure) -> Self {
        match failure {
            IntegrityFailure::PartialKeyMaterial { missing } => {
                SafeZoneError::PartialKeyMaterial {
                    missing: missing.to_string(),
                }
            }
            IntegrityFailure::MalformedArtifact { artifact, reason } => {
                malformed(artifact, &reason)
            }
            IntegrityFailure::IntegrityMismatch { positions } => {
                SafeZoneError::IntegrityMismatch { positions }
            }
        }
    }
}

impl Outcome {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Valid(_) => "valid",
            Self::Invalid(_) => "invalid",
        }
    }

    /// Turn the outcome into the verified bundle, `None` for `Absent`, or
    /// the typed error for `Invalid`.
    pub fn into_result(self) -> Result<Option<KeyBundle>> {
        match self {
            Self::Absent => Ok(None),
            Self::Valid(bundle) => Ok(Some(bundle)),
            Self::Invalid(failure) => Err(failure.into()),
        }
    }
}

/// Check the local key file against the remote digest file.
///
/// IO failures other than "file does not exist" (e.g. permission denied)
/// are returned as errors rather than classified.
pub fn verify(local_path: &Path, remote_path: &Path) -> Result<Outcome> {
    let local_exists = local_path.try_exists()?;
    let remote_exists = remote_path.try_exists()?;

    match (local_exists, remote_exists) {
        (false, false) => return Ok(Outcome::Absent),
        (true, false) => {
            return Ok(Outcome::Invalid(IntegrityFailure::PartialKeyMaterial {
                missing: ArtifactKind::RemoteDigests,
            }))
        }
        (false, true) => {
            return Ok(Outcome::Invalid(IntegrityFailure::PartialKeyMaterial {
                missing: ArtifactKind::LocalKeys,
            }))
        }
        (true, true) => {}
    }

    let keys = match load(local_path, ArtifactKind::LocalKeys, KEY_LEN)? {
        Ok(entries) => entries,
        Err(failure) => return Ok(Outcome::Invalid(failure)),
    };
    let digests = match load(remote_path, ArtifactKind::RemoteDigests, DIGEST_LEN)? {
        Ok(entries) => entries,
        Err(failure) => return Ok(Outcome::Invalid(failure)),
    };

    let keys: Vec<SecretKey> = keys
        .iter()
        .filter_map(|bytes| SecretKey::from_slice(bytes))
        .collect();
    let keys: [SecretKey; BUNDLE_SIZE] = match keys.try_into() {
        Ok(keys) => keys,
        Err(_) => {
            return Ok(Outcome::Invalid(IntegrityFailure::MalformedArtifact {
                artifact: ArtifactKind::LocalKeys,
                reason: "could not load key entries".into(),
            }))
        }
    };

    // Every position is compared; no early exit.
    let positions: Vec<usize> = keys
        .iter()
        .zip(digests.iter())
        .enumerate()
        .filter(|(_, (key, stored))| {
            let computed = key.digest();
            !bool::from(computed.as_slice().ct_eq(stored.as_slice()))
        })
        .map(|(idx, _)| idx)
        .collect();

    if positions.is_empty() {
        Ok(Outcome::Valid(KeyBundle::new(keys)))
    } else {
        Ok(Outcome::Invalid(IntegrityFailure::IntegrityMismatch { positions }))
    }
}

/// Read one artifact and require exactly `BUNDLE_SIZE` entries.
///
/// The outer `Result` carries IO errors, the inner one a classification.
fn load(
    path: &Path,
    kind: ArtifactKind,
    width: usize,
) -> Result<std::result::Result<Vec<Vec<u8>>, IntegrityFailure>> {
    let entries = match read_entries(path, kind, width) {
        Ok(entries) => entries,
        Err(SafeZoneError::MalformedArtifact { reason, .. }) => {
            return Ok(Err(IntegrityFailure::MalformedArtifact {
                artifact: kind,
                reason,
            }))
        }
        Err(e) => return Err(e),
    };

    if entries.len() != BUNDLE_SIZE {
        return Ok(Err(IntegrityFailure::MalformedArtifact {
            artifact: kind,
            reason: format!("expected {BUNDLE_SIZE} entries, found {}", entries.len()),
        }));
    }

    Ok(Ok(entries))
}
