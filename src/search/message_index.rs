//! In-memory full-text index over message bodies.
//!
//! This is the reference implementation of the message index collaborator.
//! It applies the same AND-of-prefix term semantics as the term matcher to
//! message bodies, orders hits newest first and renders snippets with `<b>`
//! emphasis around matched words.

use crate::matching::{QueryTerms, Token};
use crate::models::{MessageHit, MessageRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// Default cap on the number of message hits per query
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Default words of context on each side of the first matched word
pub const DEFAULT_CONTEXT_WORDS: usize = 6;

const ELLIPSIS: &str = "...";

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

/// Tuning knobs for the message index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Maximum hits returned for one query
    pub max_results: usize,

    /// Words of context kept on each side of the first match in a snippet
    pub context_words: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            context_words: DEFAULT_CONTEXT_WORDS,
        }
    }
}

#[derive(Debug, Clone)]
struct IndexedMessage {
    record: MessageRecord,
    words: Vec<Token>,
}

/// Full-text search index for message bodies.
#[derive(Debug, Clone, Default)]
pub struct FullTextMessageIndex {
    /// Messages, newest first
    messages: Vec<IndexedMessage>,
    options: IndexOptions,
}

impl FullTextMessageIndex {
    /// Build an index over the given messages.
    ///
    /// Messages are ordered newest first; messages sent at the same instant
    /// keep their input order.
    pub fn build(records: &[MessageRecord], options: IndexOptions) -> Self {
        let mut messages: Vec<IndexedMessage> = records
            .iter()
            .map(|record| IndexedMessage {
                words: Token::tokenize(&record.body),
                record: record.clone(),
            })
            .collect();

        messages.sort_by(|a, b| b.record.sent_at.cmp(&a.record.sent_at));

        Self { messages, options }
    }

    /// Search message bodies for a raw query.
    ///
    /// An empty query yields no hits.
    pub fn search(&self, query: &str) -> Vec<MessageHit> {
        let Some(terms) = QueryTerms::parse(query) else {
            return Vec::new();
        };

        self.messages
            .iter()
            .filter(|message| terms.all_match(&message.words))
            .take(self.options.max_results)
            .map(|message| MessageHit {
                message_id: message.record.id.clone(),
                conversation_id: message.record.conversation_id.clone(),
                snippet: render_snippet(&message.record.body, &terms, self.options.context_words),
            })
            .collect()
    }

    /// Get the number of indexed messages.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Options the index was built with.
    pub fn options(&self) -> IndexOptions {
        self.options
    }
}

/// Render a snippet of `body` with matched words wrapped in `<b>` tags.
///
/// The body is HTML-escaped so the only markup in the snippet is the
/// emphasis. The window is centered on the first matched word.
pub fn render_snippet(body: &str, terms: &QueryTerms, context_words: usize) -> String {
    let words: Vec<&str> = WORD_RE.find_iter(body).map(|m| m.as_str()).collect();
    if words.is_empty() {
        return String::new();
    }

    let emphasized: Vec<bool> = words
        .iter()
        .map(|word| {
            Token::tokenize(word)
                .iter()
                .any(|token| terms.any_matches(token))
        })
        .collect();

    let first_match = emphasized.iter().position(|&e| e).unwrap_or(0);
    let start = first_match.saturating_sub(context_words);
    let end = first_match
        .saturating_add(context_words)
        .saturating_add(1)
        .min(words.len());

    let mut snippet = words[start..end]
        .iter()
        .zip(&emphasized[start..end])
        .map(|(word, &bold)| {
            let escaped = escape_html(word);
            if bold {
                format!("<b>{}</b>", escaped)
            } else {
                escaped
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if start > 0 {
        snippet = format!("{}{}", ELLIPSIS, snippet);
    }
    if end < words.len() {
        snippet = format!("{}{}", snippet, ELLIPSIS);
    }

    snippet
}

/// Escape the characters that would otherwise be read as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
