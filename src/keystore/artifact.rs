//! Line-oriented hex artifact files.
//!
//! Both halves of the key material use the same layout: one lowercase hex
//! entry per line, newline terminated, in generation order.
//!
//! ```text
//! <hex key 1 | hex digest 1>
//! <hex key 2 | hex digest 2>
//! <hex key 3 | hex digest 3>
//! ```
//!
//! Empty lines are ignored on read. Every other line must be the exact
//! lowercase hex that was written.

use std::fs;
use std::path::Path;

use crate::crypto::digest::{from_hex, to_hex};
use crate::errors::{Result, SafeZoneError};

/// Which half of the key material a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// The local file holding the raw keys.
    LocalKeys,
    /// The file on the removable drive holding one digest per key.
    RemoteDigests,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocalKeys => f.write_str("local key file"),
            Self::RemoteDigests => f.write_str("remote digest file"),
        }
    }
}

/// Write `entries` as hex lines to `path`, replacing any prior content.
///
/// The file is written to a temp file in the same directory, restricted to
/// owner-only permissions, then renamed over the target so a reader never
/// sees a half-written artifact.
pub fn write_entries<E: AsRef<[u8]>>(path: &Path, entries: &[E]) -> Result<()> {
    let mut contents = String::new();
    for entry in entries {
        contents.push_str(&to_hex(entry.as_ref()));
        contents.push('\n');
    }

    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, contents.as_bytes())?;
    restrict_permissions(&tmp_path)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Read the hex entries of an artifact and decode each to exactly `width` bytes.
///
/// Any entry that is not valid hex or has the wrong width makes the whole
/// artifact malformed.
pub fn read_entries(path: &Path, kind: ArtifactKind, width: usize) -> Result<Vec<Vec<u8>>> {
    let contents = fs::read(path)?;
    let text = String::from_utf8(contents).map_err(|_| malformed(kind, "not valid text"))?;

    // Entries are compared byte for byte, so nothing but the newline is
    // stripped; a stray space or `\r` makes the entry malformed.
    let mut entries = Vec::new();
    for (idx, line) in text.split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }
        let bytes = from_hex(line)
            .ok_or_else(|| malformed(kind, &format!("line {} is not valid hex", idx + 1)))?;
        if bytes.len() != width {
            return Err(malformed(
                kind,
                &format!(
                    "line {} decodes to {} bytes, expected {width}",
                    idx + 1,
                    bytes.len()
                ),
            ));
        }
        entries.push(bytes);
    }

    Ok(entries)
}

/// Returns `true` if group or others can access the file.
///
/// Always `false` on non-Unix platforms.
pub fn permissions_too_open(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path)
            .map(|m| m.permissions().mode() & 0o077 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        let _ = path;
        false
    }
}

/// On Unix, restrict permissions to owner-only read/write.
pub(crate) fn restrict_permissions(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}

pub(crate) fn malformed(kind: ArtifactKind, reason: &str) -> SafeZoneError {
    SafeZoneError::MalformedArtifact {
        artifact: kind.to_string(),
        reason: reason.to_string(),
    }
}
