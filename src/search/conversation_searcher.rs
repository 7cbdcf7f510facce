//! Assembles a [`SearchResultSet`] from the three collaborators.
//!
//! One search reads one snapshot: conversations are matched first, then
//! contacts that have no matched direct conversation, then message bodies
//! through the message index. Each list keeps the order its collaborator
//! produced; nothing is re-sorted.

use super::result_set::{
    ContactSearchResult, ConversationSearchResult, MessageSearchResult, SearchResultSet,
};
use crate::domain::{ConversationId, MessageId, RecipientId};
use crate::error::SearchResult;
use crate::matching::{QueryTerms, Searcher};
use crate::metrics::{Metrics, SearchTimer};
use crate::models::{Contact, Conversation, ConversationSummary, MessageHit};
use crate::repositories::{ReadSnapshot, SnapshotSource};
use std::collections::{HashMap, HashSet};

/// Runs searches over conversations, contacts and messages.
///
/// Holds no per-search state; every call builds its own dedup sets, so a
/// single searcher can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct ConversationSearcher {
    metrics: Metrics,
}

impl ConversationSearcher {
    /// Create a new searcher recording into `metrics`.
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }

    /// Metrics this searcher records into.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Search everything the source holds.
    ///
    /// An empty or whitespace-only query returns the canonical empty result
    /// set without acquiring a snapshot. Otherwise exactly one snapshot is
    /// read and released before returning, whether or not the search fails.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's error if the snapshot cannot be acquired or
    /// a collaborator cannot enumerate its records.
    pub fn search(&self, query: &str, source: &dyn SnapshotSource) -> SearchResult<SearchResultSet> {
        if query.trim().is_empty() {
            self.metrics.record_empty_query();
            return Ok(SearchResultSet::empty());
        }

        let timer = SearchTimer::new(self.metrics.clone());
        let snapshot = source.read_snapshot()?;
        let results = self.results(query, &*snapshot)?;
        timer.complete();

        Ok(results)
    }

    /// Search an already acquired snapshot.
    ///
    /// # Errors
    ///
    /// Propagates enumeration failures from the snapshot; no partial result
    /// set is returned.
    pub fn results(&self, query: &str, snapshot: &dyn ReadSnapshot) -> SearchResult<SearchResultSet> {
        if query.trim().is_empty() {
            self.metrics.record_empty_query();
            return Ok(SearchResultSet::empty());
        }

        let terms = QueryTerms::parse(query);

        let scan = self.match_conversations(terms.as_ref(), snapshot)?;
        let contacts = self.match_contacts(terms.as_ref(), snapshot, &scan.direct_recipients)?;
        let messages = self.attach_messages(snapshot.search_messages(query)?, &scan.summaries);

        tracing::debug!(
            query = %query,
            conversations = scan.matched.len(),
            contacts = contacts.len(),
            messages = messages.len(),
            "Search completed"
        );
        self.metrics
            .record_results(scan.matched.len(), contacts.len(), messages.len());

        Ok(SearchResultSet::new(query, scan.matched, contacts, messages))
    }

    fn match_conversations(
        &self,
        terms: Option<&QueryTerms>,
        snapshot: &dyn ReadSnapshot,
    ) -> SearchResult<ConversationScan> {
        let searcher: Searcher<Conversation, _> =
            Searcher::new(|conversation: &Conversation| conversation.index_text(snapshot));

        let mut scan = ConversationScan::default();

        for record in snapshot.conversations()? {
            let raw_id = record.id.clone();
            let conversation = match Conversation::try_from(record) {
                Ok(conversation) => conversation,
                Err(e) => {
                    tracing::warn!(conversation = %raw_id, error = %e, "Skipping malformed conversation record");
                    self.metrics.record_skipped();
                    continue;
                }
            };

            if scan.summaries.contains_key(&conversation.id) {
                tracing::warn!(conversation = %conversation.id, "Skipping duplicate conversation record");
                self.metrics.record_skipped();
                continue;
            }

            let summary = conversation.summary(snapshot);
            scan.summaries
                .insert(conversation.id.clone(), summary.clone());

            let Some(terms) = terms else { continue };
            if !searcher.matches_terms(&conversation, terms) {
                continue;
            }

            if let Some(recipient) = conversation.direct_recipient() {
                scan.direct_recipients.insert(recipient.clone());
            }
            scan.matched.push(ConversationSearchResult {
                snippet: Some(summary.name.clone()),
                conversation: summary,
            });
        }

        Ok(scan)
    }

    fn match_contacts(
        &self,
        terms: Option<&QueryTerms>,
        snapshot: &dyn ReadSnapshot,
        direct_recipients: &HashSet<RecipientId>,
    ) -> SearchResult<Vec<ContactSearchResult>> {
        let searcher: Searcher<Contact, _> = Searcher::indexable();

        let mut seen = HashSet::new();
        let mut matched = Vec::new();

        for record in snapshot.contacts()? {
            let raw_id = record.identifier.clone();
            let contact = match Contact::try_from(record) {
                Ok(contact) => contact,
                Err(e) => {
                    tracing::warn!(contact = %raw_id, error = %e, "Skipping malformed contact record");
                    self.metrics.record_skipped();
                    continue;
                }
            };

            if !seen.insert(contact.recipient_id.clone()) {
                continue;
            }

            let Some(terms) = terms else { continue };
            if direct_recipients.contains(&contact.recipient_id)
                || !searcher.matches_terms(&contact, terms)
            {
                continue;
            }

            let display_name = if contact.display_name.trim().is_empty() {
                contact.recipient_id.to_string()
            } else {
                contact.display_name
            };

            matched.push(ContactSearchResult {
                snippet: contact.recipient_id.to_string(),
                recipient_id: contact.recipient_id,
                display_name,
            });
        }

        Ok(matched)
    }

    fn attach_messages(
        &self,
        hits: Vec<MessageHit>,
        summaries: &HashMap<ConversationId, ConversationSummary>,
    ) -> Vec<MessageSearchResult> {
        let mut messages = Vec::with_capacity(hits.len());

        for hit in hits {
            let ids = MessageId::new(hit.message_id.as_str())
                .and_then(|m| ConversationId::new(hit.conversation_id.as_str()).map(|c| (m, c)));
            let (message_id, conversation_id) = match ids {
                Ok(ids) => ids,
                Err(e) => {
                    tracing::warn!(message_id = %hit.message_id, error = %e, "Skipping malformed message hit");
                    self.metrics.record_skipped();
                    continue;
                }
            };

            let Some(summary) = summaries.get(&conversation_id) else {
                tracing::warn!(
                    message_id = %message_id,
                    conversation = %conversation_id,
                    "Skipping message hit for unknown conversation"
                );
                self.metrics.record_skipped();
                continue;
            };

            messages.push(MessageSearchResult {
                conversation: summary.clone(),
                message_id,
                snippet: hit.snippet,
            });
        }

        messages
    }
}

/// Output of the conversation pass.
#[derive(Default)]
struct ConversationScan {
    matched: Vec<ConversationSearchResult>,

    /// Every valid conversation in the snapshot, for attaching message hits
    summaries: HashMap<ConversationId, ConversationSummary>,

    /// Recipients of matched direct conversations
    direct_recipients: HashSet<RecipientId>,
}
