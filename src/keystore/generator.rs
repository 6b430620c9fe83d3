//! KeyBundle generation.
//!
//! Generation is a reset, not a rotation: it replaces both artifacts with a
//! brand-new bundle, and every record encrypted under the previous bundle
//! becomes permanently undecryptable.

use std::path::Path;

use crate::crypto::keys::KeyBundle;
use crate::errors::Result;

use super::artifact::write_entries;

/// Generate a fresh bundle and write both artifacts.
///
/// The raw keys go to `local_path` and their digests to `remote_path`,
/// same order, one per line. Both files end up owner-only.
pub fn generate(local_path: &Path, remote_path: &Path) -> Result<KeyBundle> {
    let bundle = KeyBundle::generate();
    write_bundle(&bundle, local_path, remote_path)?;
    Ok(bundle)
}

/// Persist an existing bundle to the two artifact paths.
///
/// The remote digests are written first. If the drive write fails the
/// previous pair is left untouched; if the local write then fails the pair
/// is mismatched and the next verify reports it.
pub fn write_bundle(bundle: &KeyBundle, local_path: &Path, remote_path: &Path) -> Result<()> {
    write_entries(remote_path, &bundle.digests())?;
    let keys: Vec<&[u8]> = bundle.keys().iter().map(|k| &k.as_bytes()[..]).collect();
    write_entries(local_path, &keys)?;
    Ok(())
}
