//! Error types for festival-reminder.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in festival store operations.
#[derive(Error, Debug)]
pub enum FestivalError {
    #[error("Festival '{0}' already exists")]
    AlreadyExists(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Festival '{0}' not found")]
    NotFound(String),

    #[error("No festivals saved yet")]
    Empty,

    #[error("No upcoming festivals within the next {0} days")]
    NoUpcoming(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FestivalError {
    /// Errors the shell cannot recover from by returning to the menu.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FestivalError::Io(_) | FestivalError::Parse { .. } | FestivalError::Config(_)
        )
    }
}

/// Result type alias for festival operations.
pub type FestivalResult<T> = Result<T, FestivalError>;
