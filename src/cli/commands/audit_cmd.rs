//! `safezone audit` — display the audit log.
//!
//! Usage:
//!   safezone audit               # show last 50 entries
//!   safezone audit --last 20     # show last 20
//!   safezone audit --since 7d    # entries from last 7 days

use chrono::{TimeDelta, Utc};

use crate::cli::{vault_paths, Cli};
use crate::errors::{Result, SafeZoneError};

/// Execute the `audit` command.
#[cfg(feature = "audit-log")]
pub fn execute(cli: &Cli, last: usize, since: Option<&str>) -> Result<()> {
    use crate::audit::AuditLog;
    use crate::cli::output;

    let paths = vault_paths(cli)?;

    let audit = AuditLog::open(&paths.vault_dir)
        .ok_or_else(|| SafeZoneError::AuditError("failed to open audit database".into()))?;

    let since_dt = match since {
        Some(s) => Some(parse_duration(s)?),
        None => None,
    };

    let entries = audit.query(last, since_dt)?;

    if entries.is_empty() {
        output::info("No audit entries found.");
        return Ok(());
    }

    print_audit_table(&entries);

    Ok(())
}

/// Execute the `audit` command (audit logging compiled out).
#[cfg(not(feature = "audit-log"))]
pub fn execute(cli: &Cli, last: usize, since: Option<&str>) -> Result<()> {
    let _ = (cli, last, since, vault_paths);
    Err(SafeZoneError::AuditError(
        "audit logging is disabled in this build (enable the `audit-log` feature)".into(),
    ))
}

/// Parse a human-friendly duration string like "7d", "24h", "30m".
///
/// Negative or out-of-range values are rejected instead of wrapping.
#[cfg_attr(not(feature = "audit-log"), allow(dead_code))]
fn parse_duration(input: &str) -> Result<chrono::DateTime<Utc>> {
    let input = input.trim();

    let (num_str, duration_of): (&str, fn(i64) -> Option<TimeDelta>) =
        if let Some(s) = input.strip_suffix('d') {
            (s, TimeDelta::try_days)
        } else if let Some(s) = input.strip_suffix('h') {
            (s, TimeDelta::try_hours)
        } else if let Some(s) = input.strip_suffix('m') {
            (s, TimeDelta::try_minutes)
        } else {
            return Err(SafeZoneError::CommandFailed(format!(
                "invalid duration '{input}' — use format like 7d, 24h, or 30m"
            )));
        };

    let num: i64 = num_str.parse().map_err(|_| {
        SafeZoneError::CommandFailed(format!(
            "invalid duration '{input}' — number part is not valid"
        ))
    })?;
    if num < 0 {
        return Err(SafeZoneError::CommandFailed(format!(
            "invalid duration '{input}' — must not be negative"
        )));
    }

    duration_of(num)
        .and_then(|delta| Utc::now().checked_sub_signed(delta))
        .ok_or_else(|| {
            SafeZoneError::CommandFailed(format!("invalid duration '{input}' — too large"))
        })
}

/// Print audit entries in a formatted table.
#[cfg(feature = "audit-log")]
fn print_audit_table(entries: &[crate::audit::AuditEntry]) {
    use comfy_table::{ContentArrangement, Table};
    use console::style;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "Label", "Details"]);

    for entry in entries {
        let time = entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
        let op = colorize_operation(&entry.operation);
        let label = entry.label.as_deref().unwrap_or("-");
        let details = entry.details.as_deref().unwrap_or("-");

        table.add_row(vec![time, op, label.to_string(), details.to_string()]);
    }

    println!(
        "{}",
        style(format!("{} audit entries:", entries.len())).bold()
    );
    println!("{table}");
}

/// Colorize operation names for display.
#[cfg(feature = "audit-log")]
fn colorize_operation(op: &str) -> String {
    use console::style;

    match op {
        "init" => style(op).green().to_string(),
        "credential" | "note" => style(op).blue().to_string(),
        "delete" => style(op).red().to_string(),
        "reset" => style(op).yellow().to_string(),
        "view" => style(op).cyan().to_string(),
        _ => op.to_string(),
    }
}
