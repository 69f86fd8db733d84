use thiserror::Error;

/// Errors that can occur during catalogue operations.
#[derive(Error, Debug)]
pub enum AicatError {
    /// Front matter or manifest parsing failed.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, AicatError>`.
pub type Result<T> = std::result::Result<T, AicatError>;
