//! Error types and Result aliases for CyberPort

use std::path::PathBuf;

/// Result type alias for CyberPort operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CyberPort
///
/// An unrecognized terminal command is *not* an error: the dispatcher turns it
/// into an error-category log line. Everything here is a genuine failure of
/// configuration, I/O or the host environment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Reveal errors ===
    /// A reveal step was configured with a zero emission interval
    #[error("Reveal interval must be greater than zero (step text: '{text}')")]
    InvalidRevealInterval { text: String },

    // === Contact / opener errors ===
    /// URI uses a scheme the opener refuses to hand to the host
    #[error("Refusing to open unsupported URI '{uri}'")]
    UnsupportedUri { uri: String },

    /// Host launcher failed to open a URI
    #[error("Failed to open '{uri}': {reason}")]
    OpenFailed { uri: String, reason: String },

    // === Portfolio errors ===
    /// Project id does not exist in the showcase
    #[error("Project #{id} not found")]
    ProjectNotFound { id: u32 },

    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    // === I/O and serialization errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    #[error("Error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
