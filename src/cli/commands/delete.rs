//! `safezone delete` — remove a record from the vault.

use crate::cli::input::confirm;
use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{Result, SafeZoneError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, label: &str, force: bool) -> Result<()> {
    let store = open_vault(cli)?;

    if !store.contains(label) {
        return Err(SafeZoneError::RecordNotFound(label.to_string()));
    }

    // Unless --force is set, ask for confirmation before deleting.
    if !force && !confirm(&format!("Delete record '{label}'?"))? {
        output::info("Cancelled.");
        return Ok(());
    }

    store.delete_record(label)?;

    crate::audit::log_audit(store.vault_dir(), "delete", Some(label), None);
    output::success(&format!("Deleted record '{label}'"));

    Ok(())
}
