//! Search service layer.
//!
//! Async boundary over the synchronous [`ConversationSearcher`]. Each call
//! runs on the blocking pool against a fresh snapshot; nothing is cached
//! between calls.

use crate::error::{SearchError, SearchResult};
use crate::metrics::{Metrics, MetricsSummary};
use crate::repositories::SnapshotSource;
use crate::search::{ConversationSearcher, SearchResultSet};
use async_trait::async_trait;
use std::sync::Arc;

/// Search service trait for business operations.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Search conversations, contacts and messages for `query`.
    ///
    /// An empty or whitespace-only query returns the canonical empty set.
    async fn search(&self, query: String) -> SearchResult<SearchResultSet>;

    /// Current search metrics.
    fn metrics(&self) -> MetricsSummary;
}

/// Default implementation of SearchService.
pub struct SearchServiceImpl {
    source: Arc<dyn SnapshotSource>,
    searcher: ConversationSearcher,
}

impl SearchServiceImpl {
    /// Create a new search service over `source`.
    pub fn new(source: Arc<dyn SnapshotSource>, metrics: Metrics) -> Self {
        Self {
            source,
            searcher: ConversationSearcher::new(metrics),
        }
    }
}

#[async_trait]
impl SearchService for SearchServiceImpl {
    async fn search(&self, query: String) -> SearchResult<SearchResultSet> {
        let source = Arc::clone(&self.source);
        let searcher = self.searcher.clone();

        tokio::task::spawn_blocking(move || searcher.search(&query, &*source))
            .await
            .map_err(|e| SearchError::ExecutionError(e.to_string()))?
    }

    fn metrics(&self) -> MetricsSummary {
        self.searcher.metrics().summary()
    }
}
