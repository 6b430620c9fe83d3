//! `safezone credential` — store a user/password pair.

use crate::cli::input::{read_password, read_user};
use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;
use crate::vault::layout::validate_label;
use crate::vault::Record;

/// Execute the `credential` command.
pub fn execute(cli: &Cli, label: &str, user: Option<&str>, force: bool) -> Result<()> {
    // Fail on a bad label before asking for anything secret.
    validate_label(label)?;
    let store = open_vault(cli)?;

    let existed = store.contains(label);
    if existed && !force {
        return Err(crate::errors::SafeZoneError::RecordAlreadyExists(
            label.to_string(),
        ));
    }

    let user = read_user(user)?;
    let password = read_password()?;
    let record = Record::credential(&user, &password)?;

    store.write_record(label, &record, force)?;

    let op_detail = if existed { "updated" } else { "added" };
    crate::audit::log_audit(store.vault_dir(), "credential", Some(label), Some(op_detail));

    output::success(&format!("Credential '{label}' {op_detail}."));

    Ok(())
}
