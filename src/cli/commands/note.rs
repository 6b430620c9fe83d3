//! `safezone note` — store free-form text.

use crate::cli::input::read_note_lines;
use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{Result, SafeZoneError};
use crate::vault::layout::validate_label;
use crate::vault::Record;

/// Execute the `note` command.
pub fn execute(cli: &Cli, label: &str, force: bool) -> Result<()> {
    validate_label(label)?;
    let store = open_vault(cli)?;

    let existed = store.contains(label);
    if existed && !force {
        return Err(SafeZoneError::RecordAlreadyExists(label.to_string()));
    }

    let record = Record::note(read_note_lines()?)?;

    // No shape tag is stored, so warn when the note will load differently.
    let read_back = record.read_back();
    if read_back != record {
        output::warning(&format!(
            "This note will be shown back as {} record.",
            match read_back {
                Record::Empty => "an empty",
                Record::Credential { .. } => "a credential",
                Record::Note { .. } => "a different",
            }
        ));
    }

    store.write_record(label, &record, force)?;

    let op_detail = if existed { "updated" } else { "added" };
    crate::audit::log_audit(store.vault_dir(), "note", Some(label), Some(op_detail));

    output::success(&format!("Note '{label}' {op_detail}."));

    Ok(())
}
