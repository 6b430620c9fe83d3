//! `safezone reset` — replace the key bundle.
//!
//! This is a reset, not a rotation: records are not re-encrypted, and any
//! record written under the old bundle becomes permanently unreadable.

use crate::cli::input::confirm;
use crate::cli::output;
use crate::cli::{vault_paths, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `reset` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let paths = vault_paths(cli)?;

    if !force {
        output::warning("Every existing record will become permanently unreadable.");
        if !confirm("Generate a new key bundle?")? {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let store = VaultStore::reset(&paths)?;
    let orphaned = store.list_records()?.len();

    crate::audit::log_audit(
        store.vault_dir(),
        "reset",
        None,
        Some(&format!("{orphaned} records orphaned")),
    );

    output::success(&format!(
        "New key bundle written to {} + {}",
        paths.keys_file.display(),
        paths.digest_file().display()
    ));
    if orphaned > 0 {
        output::tip(&format!(
            "{orphaned} existing record(s) can no longer be decrypted — delete them with `safezone delete`."
        ));
    }

    Ok(())
}
