//! `safezone list` — display all records in a table.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let store = open_vault(cli)?;
    let records = store.list_records()?;

    output::info(&format!(
        "{} — {} record(s)",
        store.vault_dir().display(),
        records.len()
    ));

    output::print_records_table(&records);

    Ok(())
}
