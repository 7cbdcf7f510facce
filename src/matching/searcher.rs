//! Multi-term prefix matcher.
//!
//! A [`Searcher`] decides whether an item matches a free-text query. The item
//! is reduced to text by an indexing function supplied at construction; both
//! that text and the query are split into words with the normalizer, and the
//! item matches when *every* query term prefixes *some* indexed word.
//!
//! # Example
//!
//! ```
//! use conversation_search::matching::Searcher;
//!
//! struct Character {
//!     name: &'static str,
//!     phone: &'static str,
//! }
//!
//! let searcher: Searcher<Character, _> =
//!     Searcher::new(|c: &Character| format!("{} {}", c.name, c.phone));
//! let liza = Character { name: "Stinking Lizaveta", phone: "+13235555555" };
//!
//! assert!(searcher.matches(&liza, "Liza 323"));
//! assert!(!searcher.matches(&liza, "Liza 415"));
//! assert!(!searcher.matches(&liza, "   "));
//! ```

use super::normalizer::Token;
use std::marker::PhantomData;

/// Anything that can describe itself as one searchable text blob.
pub trait Indexable {
    /// Everything searchable about the item: names, numbers, titles.
    fn index_text(&self) -> String;
}

/// A parsed, non-empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerms {
    terms: Vec<Token>,
}

impl QueryTerms {
    /// Parse a raw query into distinct terms.
    ///
    /// Returns `None` when the query has no terms (empty, whitespace, or bare
    /// punctuation); such a query matches nothing.
    pub fn parse(query: &str) -> Option<Self> {
        let terms = Token::tokenize(query.trim());
        if terms.is_empty() {
            None
        } else {
            Some(Self { terms })
        }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false; an empty query never parses.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The normalized terms, in sorted order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.text.as_str())
    }

    /// Whether every term matches at least one of the given words.
    pub fn all_match(&self, words: &[Token]) -> bool {
        self.terms
            .iter()
            .all(|term| words.iter().any(|word| term_matches(term, word)))
    }

    /// Whether at least one term matches this single word.
    pub fn any_matches(&self, word: &Token) -> bool {
        self.terms.iter().any(|term| term_matches(term, word))
    }
}

/// Whether a single query term matches a single indexed word.
///
/// Plain comparison is a case-insensitive prefix test. When both sides are
/// phone-shaped, their stripped forms are compared as well: a term with a
/// leading `+` must prefix the whole number. A bare digit run matches at any
/// digit position, so `323` finds `+13235555555` and so does `555`.
pub fn term_matches(term: &Token, word: &Token) -> bool {
    if word.text.starts_with(&term.text) {
        return true;
    }

    match (&term.phone, &word.phone) {
        (Some(term_phone), Some(word_phone)) => {
            if term_phone.starts_with('+') {
                word_phone.starts_with(term_phone.as_str())
            } else {
                word_phone
                    .trim_start_matches('+')
                    .contains(term_phone.as_str())
            }
        }
        _ => false,
    }
}

/// Term matcher over items of type `T`, parameterized by an indexing function.
///
/// The indexing function must be total over the items it is handed; the
/// searcher has no notion of an absent item.
pub struct Searcher<T: ?Sized, F> {
    indexer: F,
    _item: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> Searcher<T, F>
where
    F: Fn(&T) -> String,
{
    /// Create a searcher with the given indexing function.
    pub fn new(indexer: F) -> Self {
        Self {
            indexer,
            _item: PhantomData,
        }
    }

    /// Whether `item` matches `query`.
    ///
    /// An empty or whitespace-only query matches nothing.
    pub fn matches(&self, item: &T, query: &str) -> bool {
        match QueryTerms::parse(query) {
            Some(terms) => self.matches_terms(item, &terms),
            None => false,
        }
    }

    /// Match against a pre-parsed query, avoiding re-tokenizing per item.
    pub fn matches_terms(&self, item: &T, terms: &QueryTerms) -> bool {
        let words = Token::tokenize(&(self.indexer)(item));
        terms.all_match(&words)
    }
}

impl<T: Indexable> Searcher<T, fn(&T) -> String> {
    /// Searcher that indexes items through their [`Indexable`] impl.
    pub fn indexable() -> Self {
        Self::new(T::index_text)
    }
}
