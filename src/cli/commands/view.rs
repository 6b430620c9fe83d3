//! `safezone view` — decrypt and show one record.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{Result, SafeZoneError};
use crate::vault::Record;

/// Execute the `view` command.
pub fn execute(cli: &Cli, label: &str, json: bool, copy: bool) -> Result<()> {
    let store = open_vault(cli)?;
    let record = store.read_record(label)?;

    crate::audit::log_audit(store.vault_dir(), "view", Some(label), Some(record.kind()));

    if json {
        let text = serde_json::to_string_pretty(&record)
            .map_err(|e| SafeZoneError::SerializationError(format!("record: {e}")))?;
        println!("{text}");
        return Ok(());
    }

    if copy {
        let Record::Credential { user, password } = &record else {
            return Err(SafeZoneError::CommandFailed(format!(
                "'{label}' is a {}, only credentials can be copied",
                record.kind()
            )));
        };
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| SafeZoneError::CommandFailed(format!("clipboard unavailable: {e}")))?;
        clipboard
            .set_text(password.clone())
            .map_err(|e| SafeZoneError::CommandFailed(format!("clipboard write: {e}")))?;
        output::success(&format!("Password for '{user}' copied to clipboard."));
        return Ok(());
    }

    output::print_record(label, &record);

    Ok(())
}
