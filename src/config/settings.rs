use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SafeZoneError};

/// User-level configuration, loaded from `<config_dir>/safezone/config.toml`.
///
/// Every field is optional so SafeZone works without any config file as
/// long as the vault directory is passed on the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Mounted directory holding records and the digest file
    /// (e.g. "/mnt/safezone").
    #[serde(default)]
    pub vault_dir: Option<PathBuf>,

    /// Path of the local key file (default: `~/.keys`).
    #[serde(default)]
    pub keys_file: Option<PathBuf>,
}

// ── Implementation ───────────────────────────────────────────────────

impl Settings {
    /// Name of the config file inside the SafeZone config directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Load settings from the user's config directory.
    ///
    /// Falls back to defaults when no config directory can be resolved.
    pub fn load_default() -> Result<Self> {
        match dirs::config_dir() {
            Some(dir) => Self::load(&dir.join("safezone")),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from `<config_dir>/config.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SafeZoneError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the local key file path.
    ///
    /// Precedence: explicit override, config file, `~/.keys`.
    pub fn keys_file_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(p) = override_path.or(self.keys_file.as_deref()) {
            return Ok(p.to_path_buf());
        }
        dirs::home_dir()
            .map(|home| home.join(".keys"))
            .ok_or_else(|| {
                SafeZoneError::ConfigError(
                    "cannot resolve home directory — pass --keys-file".into(),
                )
            })
    }

    /// Resolve the vault directory.
    ///
    /// Precedence: explicit override, config file. There is no default.
    pub fn vault_dir_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        override_path
            .or(self.vault_dir.as_deref())
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                SafeZoneError::ConfigError(
                    "no vault directory configured — pass --vault-dir or set vault_dir in config.toml"
                        .into(),
                )
            })
    }
}

// ── Tests ────────────────────────────────────────────────────────────
