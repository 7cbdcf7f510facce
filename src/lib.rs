//! Conversation search - local search over a messaging address book and
//! conversation history.
//!
//! Given a free-text query, the crate returns three deduplicated lists:
//! conversations matched by participant or group title, contacts with no
//! existing direct conversation, and messages matched by body.
//!
//! # Architecture
//!
//! - **matching**: Word normalization and the multi-term prefix matcher
//! - **search**: Result assembly, result sets and the in-memory message index
//! - **repositories**: Collaborator traits and the in-memory store
//! - **models** / **domain**: Records, validated models and identifiers
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Search counters
//! - **services** / **server**: Async service and MCP server over stdio

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod search;
pub mod server;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, LoadError, SearchError};
pub use matching::{Indexable, QueryTerms, Searcher};
pub use metrics::{Metrics, MetricsSummary, SearchTimer};
pub use models::{Contact, Conversation, ConversationKind, ConversationSummary};
pub use repositories::{Dataset, InMemoryStore, SnapshotSource};
pub use search::{ConversationSearcher, SearchResultSet};
pub use server::ConversationSearchServer;
