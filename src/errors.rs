/*!
 * Error types for the subskip application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur during subtitle processing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Error when a timestamp cannot be parsed
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    /// Error when an entry's time range is inverted or empty
    #[error("Invalid time range: end time {end_ms} <= start time {start_ms}")]
    InvalidTimeRange {
        /// Entry start in milliseconds
        start_ms: u64,
        /// Entry end in milliseconds
        end_ms: u64,
    },

    /// Error when an entry carries no text
    #[error("Empty subtitle text for entry {0}")]
    EmptyText(usize),

    /// Error when no entry at all could be parsed from the input
    #[error("No valid subtitle entries were found in the SRT content")]
    NoEntries,
}

/// Errors that can occur when parsing a per-service offset specification
#[derive(Error, Debug)]
pub enum OffsetsError {
    /// Entry is not of the form `name=seconds`
    #[error("Invalid service offset entry '{0}': expected name=seconds")]
    MissingSeparator(String),

    /// Offset value is not a number
    #[error("Invalid offset for service '{service}': '{value}' is not a number")]
    InvalidSeconds {
        /// Service name of the offending entry
        service: String,
        /// The raw value that failed to parse
        value: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from service offset parsing
    #[error("Service offsets error: {0}")]
    Offsets(#[from] OffsetsError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
