use thiserror::Error;

/// actrollup error types
#[derive(Error, Debug)]
pub enum RollupError {
    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Raw log row carried an action string outside the four known kinds
    #[error("unknown action kind {action:?} for {email}")]
    UnknownAction { action: String, email: String },

    /// Cache entry could not be persisted
    #[error("cache error: {0}")]
    Cache(String),

    /// Window report could not be written
    #[error("report error: {0}")]
    Report(String),
}

/// Result type alias for actrollup
pub type Result<T> = std::result::Result<T, RollupError>;
