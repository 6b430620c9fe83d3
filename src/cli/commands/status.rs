//! `safezone status` — report the state of the key files without changing them.

use crate::cli::output;
use crate::cli::{vault_paths, Cli};
use crate::errors::Result;
use crate::keystore::artifact::permissions_too_open;
use crate::keystore::Outcome;

/// Execute the `status` command.
///
/// `Invalid` is returned as an error so the process exits non-zero.
pub fn execute(cli: &Cli) -> Result<()> {
    let paths = vault_paths(cli)?;
    output::info(&format!("Key file:    {}", paths.keys_file.display()));
    output::info(&format!("Digest file: {}", paths.digest_file().display()));

    match paths.verify()? {
        Outcome::Absent => {
            output::info("No key material yet.");
            output::tip("Run `safezone init` to generate a key bundle.");
        }
        Outcome::Valid(_) => {
            output::success("Key files are present and consistent.");
            if permissions_too_open(&paths.keys_file) {
                output::warning("The key file is readable by other users.");
            }
        }
        invalid @ Outcome::Invalid(_) => {
            invalid.into_result()?;
        }
    }

    Ok(())
}
