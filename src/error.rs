//! Error types for conversation search.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use std::fmt;
use thiserror::Error;

/// Result list a bounds-checked accessor was reading from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSection {
    Conversations,
    Contacts,
    Messages,
}

impl fmt::Display for ResultSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Conversations => "conversations",
            Self::Contacts => "contacts",
            Self::Messages => "messages",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The conversation store or contact directory could not be read
    #[error("Data store unavailable: {0}")]
    StoreUnavailable(String),

    /// The full-text message index could not be queried
    #[error("Message index unavailable: {0}")]
    IndexUnavailable(String),

    /// A result accessor was called with an index past the end of its list
    #[error("Index {index} out of range for {section} (len {len})")]
    IndexOutOfRange {
        section: ResultSection,
        index: usize,
        len: usize,
    },

    /// Search execution failed
    #[error("Search execution failed: {0}")]
    ExecutionError(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors that can occur while loading a dataset snapshot from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The snapshot file could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file is not valid JSON for a dataset
    #[error("Failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with LoadError
pub type LoadResult<T> = Result<T, LoadError>;
