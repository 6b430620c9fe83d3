//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod input;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::errors::Result;
use crate::vault::{Provisioning, VaultPaths, VaultStore};

/// SafeZone CLI: a personal secret vault split across a key file and a removable drive.
#[derive(Parser)]
#[command(
    name = "safezone",
    about = "Personal secret vault gated by a local key file and a removable drive",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Mounted vault directory on the removable drive
    #[arg(long, env = "SAFEZONE_VAULT_DIR", global = true)]
    pub vault_dir: Option<PathBuf>,

    /// Local key file (default: ~/.keys)
    #[arg(long, env = "SAFEZONE_KEYS_FILE", global = true)]
    pub keys_file: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Verify the key files, generating them on first run
    Init,

    /// Check the key files without generating anything
    Status,

    /// Store a user/password credential
    Credential {
        /// Record label (file name without the .key suffix)
        label: String,
        /// User name (omit for interactive prompt)
        #[arg(short, long)]
        user: Option<String>,
        /// Overwrite an existing record
        #[arg(short, long)]
        force: bool,
    },

    /// Store a free-form note (reads stdin when piped)
    Note {
        /// Record label
        label: String,
        /// Overwrite an existing record
        #[arg(short, long)]
        force: bool,
    },

    /// Decrypt and show a record
    View {
        /// Record label
        label: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
        /// Copy a credential's password to the clipboard instead of printing it
        #[arg(long, conflicts_with = "json")]
        copy: bool,
    },

    /// List all records
    List,

    /// Delete a record
    Delete {
        /// Record label
        label: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Replace the key files with a new bundle (existing records become unreadable)
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// View the audit log of vault operations
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,
        /// Show entries since a duration ago (e.g. 7d, 24h, 30m)
        #[arg(long)]
        since: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the key file and vault directory from CLI args and the config file.
pub fn vault_paths(cli: &Cli) -> Result<VaultPaths> {
    let settings = Settings::load_default()?;
    let keys_file = settings.keys_file_path(cli.keys_file.as_deref())?;
    let vault_dir = settings.vault_dir_path(cli.vault_dir.as_deref())?;
    Ok(VaultPaths::new(keys_file, vault_dir))
}

/// Run the integrity gate and open the vault.
///
/// Tells the user when a fresh bundle had to be generated, so a first run
/// is never silent.
pub fn open_vault(cli: &Cli) -> Result<VaultStore> {
    let paths = vault_paths(cli)?;
    let (store, provisioning) = VaultStore::open(&paths)?;

    if provisioning == Provisioning::Generated {
        output::info(&format!(
            "No key material found — generated a new bundle ({} + {})",
            paths.keys_file.display(),
            paths.digest_file().display()
        ));
        crate::audit::log_audit(store.vault_dir(), "init", None, Some("generated"));
    }

    Ok(store)
}
