//! Term matching utilities.
//!
//! This module provides the text normalizer and the generic multi-term
//! prefix matcher used against contacts, conversations and message bodies.

pub mod normalizer;
pub mod searcher;

pub use normalizer::{normalize_word, phone_normalized, split_into_words, Token};
pub use searcher::{term_matches, Indexable, QueryTerms, Searcher};
