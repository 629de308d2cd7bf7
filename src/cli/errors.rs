use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input directory does not exist: {path}")]
    MissingInputDir { path: String },

    #[error("Invalid config file {path}: {source}")]
    InvalidConfig {
        path: String,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
