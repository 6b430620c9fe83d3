//! Audit log — SQLite-based operation history.
//!
//! Stores a record of every vault operation (init, credential, view, etc.)
//! in a local SQLite database at `<vault_dir>/audit.db`. Only labels and
//! short details are stored, never record contents.
//!
//! Designed for graceful degradation: if the database can't be opened or
//! written to, operations silently continue without logging.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// A single audit log entry.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub operation: String,
    pub label: Option<String>,
    pub details: Option<String>,
}

/// Return the path to the audit database (for testing/display).
pub fn db_path(vault_dir: &Path) -> PathBuf {
    vault_dir.join("audit.db")
}

#[cfg(feature = "audit-log")]
mod sqlite {
    use std::path::Path;

    use chrono::{DateTime, Utc};
    use rusqlite::Connection;

    use super::{db_path, AuditEntry};
    use crate::errors::{Result, SafeZoneError};

    /// SQLite-backed audit log.
    pub struct AuditLog {
        conn: Connection,
    }

    impl AuditLog {
        /// Open (or create) the audit database at `<vault_dir>/audit.db`.
        ///
        /// Returns `None` if the database can't be opened — callers should
        /// treat this as "audit logging unavailable" and continue normally.
        pub fn open(vault_dir: &Path) -> Option<Self> {
            let path = db_path(vault_dir);
            let conn = Connection::open(&path).ok()?;

            // Owner-only, like the key files.
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let perms = std::fs::Permissions::from_mode(0o600);
                let _ = std::fs::set_permissions(&path, perms);
            }

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS audit_log (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    timestamp   TEXT NOT NULL,
                    operation   TEXT NOT NULL,
                    label       TEXT,
                    details     TEXT
                );",
            )
            .ok()?;

            Some(Self { conn })
        }

        /// Record an operation. Fire-and-forget — errors are silently ignored.
        pub fn log(&self, operation: &str, label: Option<&str>, details: Option<&str>) {
            let now = Utc::now().to_rfc3339();
            let _ = self.conn.execute(
                "INSERT INTO audit_log (timestamp, operation, label, details)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![now, operation, label, details],
            );
        }

        /// Query recent audit entries, most recent first.
        ///
        /// - `limit`: maximum number of entries to return.
        /// - `since`: if provided, only return entries newer than this timestamp.
        pub fn query(&self, limit: usize, since: Option<DateTime<Utc>>) -> Result<Vec<AuditEntry>> {
            let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
            // RFC 3339 timestamps in UTC sort lexically.
            let since_str = since.map_or_else(String::new, |ts| ts.to_rfc3339());

            let mut stmt = self
                .conn
                .prepare(
                    "SELECT id, timestamp, operation, label, details
                     FROM audit_log
                     WHERE timestamp >= ?1
                     ORDER BY id DESC
                     LIMIT ?2",
                )
                .map_err(|e| SafeZoneError::AuditError(format!("query prepare: {e}")))?;

            let rows = stmt
                .query_map(rusqlite::params![since_str, limit_i64], |row| {
                    let ts_str: String = row.get(1)?;
                    let timestamp = DateTime::parse_from_rfc3339(&ts_str)
                        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

                    Ok(AuditEntry {
                        id: row.get(0)?,
                        timestamp,
                        operation: row.get(2)?,
                        label: row.get(3)?,
                        details: row.get(4)?,
                    })
                })
                .map_err(|e| SafeZoneError::AuditError(format!("query exec: {e}")))?;

            let mut entries = Vec::new();
            for row in rows {
                entries
                    .push(row.map_err(|e| SafeZoneError::AuditError(format!("row parse: {e}")))?);
            }

            Ok(entries)
        }
    }
}

#[cfg(feature = "audit-log")]
pub use sqlite::AuditLog;

/// Convenience helper: log an audit event for the vault at `vault_dir`.
///
/// Opens the audit database, logs the event, and silently ignores any errors.
/// This is safe to call from any command — it never fails the parent operation.
pub fn log_audit(vault_dir: &Path, op: &str, label: Option<&str>, details: Option<&str>) {
    #[cfg(feature = "audit-log")]
    {
        if let Some(audit) = AuditLog::open(vault_dir) {
            audit.log(op, label, details);
        }
    }

    #[cfg(not(feature = "audit-log"))]
    let _ = (vault_dir, op, label, details);
}
