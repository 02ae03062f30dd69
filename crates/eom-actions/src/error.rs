//! Error type for the action layer.
//!
//! Queries against the calendar never fail; everything that can go wrong
//! here belongs to a collaborator (holiday source, notifier, event creator)
//! or to reading its input file. Configuration problems are reported
//! separately as [`ConfigError`](crate::config::ConfigError), before any
//! collaborator exists.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while fetching holidays or executing month-end actions.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The holiday source could not deliver holidays.
    #[error("failed to fetch holidays: {0}")]
    HolidaySource(String),

    /// The notification could not be delivered.
    #[error("failed to send notification: {0}")]
    Notification(String),

    /// The calendar event could not be created.
    #[error("failed to create calendar event: {0}")]
    Calendar(String),

    /// Reading an input file failed.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An input document is not valid JSON of the expected shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand `Result` for the action layer.
pub type Result<T, E = ActionError> = std::result::Result<T, E>;
