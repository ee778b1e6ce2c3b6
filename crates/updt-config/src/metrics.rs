//! Counters for configuration update handling
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use updt_config::{ConfigStoreService, Metrics, StoreConfig};
//!
//! let metrics = Arc::new(Metrics::new());
//! let mut service = ConfigStoreService::with_metrics(StoreConfig::default(), metrics.clone());
//! // ... drive updates ...
//! let snapshot = metrics.snapshot();
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::StatusFlags;

/// Counters for update handling.
#[derive(Default)]
pub struct Metrics {
    /// Total `set` calls that produced a status
    pub sets_received: AtomicU64,
    /// Candidates accepted (no error bits)
    pub sets_accepted: AtomicU64,
    /// Candidates rejected by validation or length
    pub sets_rejected: AtomicU64,
    /// Payloads of the wrong length
    pub invalid_length: AtomicU64,
    /// Accepted candidates that still raised a warning
    pub sets_with_warnings: AtomicU64,
    /// Records written to the block store
    pub records_written: AtomicU64,
    /// Bytes written to the block store
    pub bytes_written: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one `set`
    pub fn record_set(&self, status: StatusFlags) {
        self.sets_received.fetch_add(1, Ordering::Relaxed);
        if status.contains(StatusFlags::INVALID_LENGTH) {
            self.invalid_length.fetch_add(1, Ordering::Relaxed);
        }
        if status.is_accepted() {
            self.sets_accepted.fetch_add(1, Ordering::Relaxed);
            if !status.warnings().is_empty() {
                self.sets_with_warnings.fetch_add(1, Ordering::Relaxed);
            }
        } else {
            self.sets_rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a record write
    pub fn record_write(&self, bytes: usize) {
        self.records_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            sets_received: self.sets_received.load(Ordering::Relaxed),
            sets_accepted: self.sets_accepted.load(Ordering::Relaxed),
            sets_rejected: self.sets_rejected.load(Ordering::Relaxed),
            invalid_length: self.invalid_length.load(Ordering::Relaxed),
            sets_with_warnings: self.sets_with_warnings.load(Ordering::Relaxed),
            records_written: self.records_written.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.sets_received.store(0, Ordering::Relaxed);
        self.sets_accepted.store(0, Ordering::Relaxed);
        self.sets_rejected.store(0, Ordering::Relaxed);
        self.invalid_length.store(0, Ordering::Relaxed);
        self.sets_with_warnings.store(0, Ordering::Relaxed);
        self.records_written.store(0, Ordering::Relaxed);
        self.bytes_written.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub sets_received: u64,
    pub sets_accepted: u64,
    pub sets_rejected: u64,
    pub invalid_length: u64,
    pub sets_with_warnings: u64,
    pub records_written: u64,
    pub bytes_written: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder {
    /// Record the outcome of one `set`
    fn record_set(&self, status: StatusFlags);

    /// Record a record write
    fn record_write(&self, bytes: usize);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_set(&self, _: StatusFlags) {}
    fn record_write(&self, _: usize) {}
}

impl MetricsRecorder for Metrics {
    fn record_set(&self, status: StatusFlags) {
        Metrics::record_set(self, status);
    }

    fn record_write(&self, bytes: usize) {
        Metrics::record_write(self, bytes);
    }
}

impl<M: MetricsRecorder + ?Sized> MetricsRecorder for Arc<M> {
    fn record_set(&self, status: StatusFlags) {
        (**self).record_set(status);
    }

    fn record_write(&self, bytes: usize) {
        (**self).record_write(bytes);
    }
}
