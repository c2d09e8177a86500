//! Data loading error types

use thiserror::Error;

/// Errors that can occur while loading metrics from a source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source could not produce a metric list
    ///
    /// Only the fixed message is shown to the user; `reason` goes to the log.
    #[error("Failed to load analytics data")]
    Unavailable { reason: String },
}

impl LoadError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        LoadError::Unavailable {
            reason: reason.into(),
        }
    }

    /// Detail for logs
    pub fn reason(&self) -> &str {
        match self {
            LoadError::Unavailable { reason } => reason,
        }
    }
}

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;
