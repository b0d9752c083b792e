/// Result alias used across all Kurral crates.
pub type KurralResult<T> = Result<T, KurralError>;

/// Top-level error type.
///
/// The engines themselves are total over their documented input domain:
/// missing or malformed data is handled by defaults, never by an error.
/// Errors exist only at the configuration boundary.
#[derive(Debug, thiserror::Error)]
pub enum KurralError {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
