//! Basic metrics instrumentation for search.
//!
//! Provides counters and duration tracking for searches and the records they
//! produce or skip.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for search activity.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of searches executed against a snapshot
    searches_total: Arc<AtomicU64>,

    /// Searches answered with the empty result set without reading any data
    empty_queries_total: Arc<AtomicU64>,

    /// Total duration of all searches in microseconds
    search_duration_total_us: Arc<AtomicU64>,

    /// Collaborator records skipped because they were malformed
    records_skipped_total: Arc<AtomicU64>,

    /// Conversation results returned
    conversation_results_total: Arc<AtomicU64>,

    /// Contact results returned
    contact_results_total: Arc<AtomicU64>,

    /// Message results returned
    message_results_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            searches_total: Arc::new(AtomicU64::new(0)),
            empty_queries_total: Arc::new(AtomicU64::new(0)),
            search_duration_total_us: Arc::new(AtomicU64::new(0)),
            records_skipped_total: Arc::new(AtomicU64::new(0)),
            conversation_results_total: Arc::new(AtomicU64::new(0)),
            contact_results_total: Arc::new(AtomicU64::new(0)),
            message_results_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a completed search with its duration.
    pub fn record_search(&self, duration: Duration) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
        self.search_duration_total_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record a query that short-circuited to the empty result set.
    pub fn record_empty_query(&self) {
        self.empty_queries_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a malformed record that was skipped.
    pub fn record_skipped(&self) {
        self.records_skipped_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the sizes of a returned result set.
    pub fn record_results(&self, conversations: usize, contacts: usize, messages: usize) {
        self.conversation_results_total
            .fetch_add(conversations as u64, Ordering::Relaxed);
        self.contact_results_total
            .fetch_add(contacts as u64, Ordering::Relaxed);
        self.message_results_total
            .fetch_add(messages as u64, Ordering::Relaxed);
    }

    /// Get total searches.
    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    /// Get total empty-query short circuits.
    pub fn empty_queries_total(&self) -> u64 {
        self.empty_queries_total.load(Ordering::Relaxed)
    }

    /// Get total search duration in microseconds.
    pub fn search_duration_total_us(&self) -> u64 {
        self.search_duration_total_us.load(Ordering::Relaxed)
    }

    /// Get average search duration in microseconds.
    pub fn search_duration_avg_us(&self) -> f64 {
        let total = self.search_duration_total_us.load(Ordering::Relaxed);
        let count = self.searches_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get total skipped records.
    pub fn records_skipped_total(&self) -> u64 {
        self.records_skipped_total.load(Ordering::Relaxed)
    }

    /// Get total conversation results.
    pub fn conversation_results_total(&self) -> u64 {
        self.conversation_results_total.load(Ordering::Relaxed)
    }

    /// Get total contact results.
    pub fn contact_results_total(&self) -> u64 {
        self.contact_results_total.load(Ordering::Relaxed)
    }

    /// Get total message results.
    pub fn message_results_total(&self) -> u64 {
        self.message_results_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.searches_total.store(0, Ordering::Relaxed);
        self.empty_queries_total.store(0, Ordering::Relaxed);
        self.search_duration_total_us.store(0, Ordering::Relaxed);
        self.records_skipped_total.store(0, Ordering::Relaxed);
        self.conversation_results_total.store(0, Ordering::Relaxed);
        self.contact_results_total.store(0, Ordering::Relaxed);
        self.message_results_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            searches_total: self.searches_total(),
            empty_queries_total: self.empty_queries_total(),
            search_duration_total_us: self.search_duration_total_us(),
            search_duration_avg_us: self.search_duration_avg_us(),
            records_skipped_total: self.records_skipped_total(),
            conversation_results_total: self.conversation_results_total(),
            contact_results_total: self.contact_results_total(),
            message_results_total: self.message_results_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsSummary {
    pub searches_total: u64,
    pub empty_queries_total: u64,
    pub search_duration_total_us: u64,
    pub search_duration_avg_us: f64,
    pub records_skipped_total: u64,
    pub conversation_results_total: u64,
    pub contact_results_total: u64,
    pub message_results_total: u64,
}

/// Helper for timing a search.
pub struct SearchTimer {
    start: Instant,
    metrics: Metrics,
}

impl SearchTimer {
    /// Start timing a search.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_search(duration);
    }
}
