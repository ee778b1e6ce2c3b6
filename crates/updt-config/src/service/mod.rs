//! # Configuration Store Service
//!
//! The store coordinator. Owns the block-store handle, the persisted record
//! as last read, the candidate awaiting merge and the last status.
//!
//! ## Flow of `set`
//!
//! ```text
//! payload ──len check──→ decode ──→ candidate ┐
//!                                             ├──→ check ──accepted──→ merge ──→ encode ──→ write
//! block store ──read──→ decode ──→ persisted ─┘
//! ```
//!
//! The service is not thread-safe by intent: one update session drives it
//! at a time.

mod update;

use crate::domain::{ConfigRecord, StatusFlags, StoreConfig};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::outbound::BlockStore;

/// The configuration store coordinator.
pub struct ConfigStoreService<B, M = NoOpMetrics>
where
    B: BlockStore,
    M: MetricsRecorder,
{
    /// Bound block store, `None` until `init`.
    pub(crate) store: Option<B>,
    /// Where the record lives.
    pub(crate) config: StoreConfig,
    /// Persisted record as last read (and merged).
    pub(crate) persisted: Option<ConfigRecord>,
    /// Accepted candidate whose versions are not merged yet.
    pub(crate) pending: Option<ConfigRecord>,
    /// Status of the last `set`.
    pub(crate) status: StatusFlags,
    pub(crate) metrics: M,
}

impl<B: BlockStore> ConfigStoreService<B, NoOpMetrics> {
    /// Create an unbound service.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_metrics(config, NoOpMetrics)
    }
}

impl<B, M> ConfigStoreService<B, M>
where
    B: BlockStore,
    M: MetricsRecorder,
{
    /// Create an unbound service reporting to `metrics`.
    pub fn with_metrics(config: StoreConfig, metrics: M) -> Self {
        Self {
            store: None,
            config,
            persisted: None,
            pending: None,
            status: StatusFlags::empty(),
            metrics,
        }
    }

    /// Bind a block store. Re-binding replaces and returns the previous one.
    pub fn init(&mut self, store: B) -> Option<B> {
        tracing::debug!(offset = self.config.config_offset, "Block store bound");
        self.store.replace(store)
    }

    /// Release the block store.
    pub fn clear(&mut self) -> Option<B> {
        tracing::debug!("Block store released");
        self.store.take()
    }

    /// True while a block store is bound.
    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    /// The bound block store.
    pub fn store(&self) -> Option<&B> {
        self.store.as_ref()
    }

    /// Persisted record as last read, after any merge.
    pub fn persisted(&self) -> Option<&ConfigRecord> {
        self.persisted.as_ref()
    }

    /// Status of the last `set`.
    pub fn status(&self) -> StatusFlags {
        self.status
    }

    /// Store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
