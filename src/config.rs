//! Configuration management for the conversation search server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file with `dotenvy`, which never prints.

use crate::error::{ConfigError, ConfigResult};
use crate::search::message_index::{DEFAULT_CONTEXT_WORDS, DEFAULT_MAX_RESULTS};
use crate::search::IndexOptions;
use std::env;
use std::path::PathBuf;

/// Environment variable naming the JSON dataset to serve.
pub const DATA_PATH_VAR: &str = "CONVERSATION_SEARCH_DATA_PATH";

/// Configuration for the conversation search server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON dataset of contacts, conversations and messages
    pub data_path: PathBuf,

    /// Maximum number of message hits per search (default: 100)
    pub max_message_results: usize,

    /// Words of context on each side of the first match in a snippet (default: 6)
    pub snippet_context_words: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONVERSATION_SEARCH_DATA_PATH`: JSON dataset to load
    ///
    /// Optional environment variables:
    /// - `MAX_MESSAGE_RESULTS`: Max message hits per search (default: 100)
    /// - `SNIPPET_CONTEXT_WORDS`: Snippet context on each side (default: 6)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let data_path = env::var(DATA_PATH_VAR)
            .map_err(|_| ConfigError::MissingVar(DATA_PATH_VAR.to_string()))?;

        if data_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: DATA_PATH_VAR.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let max_message_results = Self::parse_env_usize("MAX_MESSAGE_RESULTS", DEFAULT_MAX_RESULTS)?;
        if max_message_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_MESSAGE_RESULTS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let snippet_context_words =
            Self::parse_env_usize("SNIPPET_CONTEXT_WORDS", DEFAULT_CONTEXT_WORDS)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_path: PathBuf::from(data_path),
            max_message_results,
            snippet_context_words,
            log_level,
        })
    }

    /// Options for the in-memory message index.
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            max_results: self.max_message_results,
            context_words: self.snippet_context_words,
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::new(),
            max_message_results: DEFAULT_MAX_RESULTS,
            snippet_context_words: DEFAULT_CONTEXT_WORDS,
            log_level: "error".to_string(),
        }
    }
}
