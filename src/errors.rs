use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in SafeZone.
#[derive(Debug, Error)]
pub enum SafeZoneError {
    // --- Crypto errors ---
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Input of {0} bytes is not a whole number of cipher blocks")]
    UnalignedInput(usize),

    #[error("Decryption failed — record is not valid text (wrong key or corrupted data)")]
    DecryptionFailed,

    // --- Key material errors ---
    #[error("Integrity error: only one key file exists ({missing} is missing)")]
    PartialKeyMaterial { missing: String },

    #[error("Integrity verification failed — digest mismatch at key position(s) {positions:?}")]
    IntegrityMismatch { positions: Vec<usize> },

    #[error("Malformed {artifact}: {reason}")]
    MalformedArtifact { artifact: String, reason: String },

    // --- Vault errors ---
    #[error("Vault directory not found at {0} — is the drive mounted?")]
    VaultDirMissing(PathBuf),

    #[error("Record '{0}' not found")]
    RecordNotFound(String),

    #[error("Record '{0}' already exists (use --force to overwrite)")]
    RecordAlreadyExists(String),

    #[error("Invalid record label: {0}")]
    InvalidLabel(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- Audit errors ---
    #[error("Audit error: {0}")]
    AuditError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for SafeZone results.
pub type Result<T> = std::result::Result<T, SafeZoneError>;
