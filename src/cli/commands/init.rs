//! `safezone init` — run the integrity gate, generating key files on first run.

use crate::cli::output;
use crate::cli::{vault_paths, Cli};
use crate::errors::Result;
use crate::keystore::artifact::permissions_too_open;
use crate::vault::{Provisioning, VaultStore};

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let paths = vault_paths(cli)?;
    let (store, provisioning) = VaultStore::open(&paths)?;

    match provisioning {
        Provisioning::Generated => {
            output::success(&format!(
                "Generated a new key bundle: {} + {}",
                paths.keys_file.display(),
                paths.digest_file().display()
            ));
            output::tip("Keep the drive and the key file apart — both are needed to open the vault.");
            crate::audit::log_audit(store.vault_dir(), "init", None, Some("generated"));
        }
        Provisioning::Verified => {
            output::success("Key files verified.");
            crate::audit::log_audit(store.vault_dir(), "init", None, Some("verified"));
        }
    }

    if permissions_too_open(&paths.keys_file) {
        output::warning(&format!(
            "{} is readable by other users — run `chmod 600` on it.",
            paths.keys_file.display()
        ));
    }

    output::tip("Run `safezone credential <LABEL>` to store a login.");
    output::tip("Run `safezone list` to see stored records.");

    Ok(())
}
