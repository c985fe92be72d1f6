use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// This enum provides structured error information for the dispatch flow,
/// supporting automatic conversion from anyhow and detailed context for
/// user feedback.
#[derive(Error, Debug)]
pub enum AppError {
    /// Menu selection parsed to an integer outside the known channel set
    #[error("Invalid choice: {choice}. Valid choices are 1 (Email), 2 (SMS), 3 (Telegram)")]
    InvalidSelection { choice: i64 },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Console stream failure, on the output sink or on stdin
    #[error("I/O failure on {stream}")]
    Io {
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
