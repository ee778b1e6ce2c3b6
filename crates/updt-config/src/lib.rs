//! # UPDT Configuration Store
//!
//! Validates and persists the firmware-update identity/version block of a
//! device before an update is committed.
//!
//! ## Architecture
//!
//! ```text
//! transport ──payload──→ ConfigStoreService::set
//!                          ├─ codec::decode (candidate)
//!                          ├─ BlockStore::read → codec::decode (persisted)
//!                          ├─ validator::check → StatusFlags
//!                          └─ accepted? merge versions → codec::encode → BlockStore::write
//! transport ←─32 bytes── ConfigStoreService::set_response
//! ```
//!
//! ## Rules
//!
//! | Check | Kind |
//! |-------|------|
//! | Reserved bytes are zero | error |
//! | Candidate bootloader flags are zero | error |
//! | Stored bootloader version ≤ candidate application version | error |
//! | Vendor, model and unique id match the device | error |
//! | Firmware version increases | warning |
//! | Application version increases | warning |
//!
//! Errors block the write; warnings are reported and the update proceeds.
//! Only the firmware and application versions are ever taken from a
//! candidate.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Record, codec, status flags, validator, store config
//! - `ports/` - `ConfigUpdateApi` (inbound) and `BlockStore` (outbound)
//! - `service/` - `ConfigStoreService`, the coordinator
//! - `adapters/` - In-memory and file-backed block stores
//!
//! ## Usage
//!
//! ```ignore
//! use updt_config::{ConfigStoreService, ConfigUpdateApi, InMemoryBlockStore, StoreConfig};
//!
//! let config = StoreConfig::default();
//! let mut service = ConfigStoreService::new(config.clone());
//! service.init(InMemoryBlockStore::for_config(&config)?);
//!
//! let status = service.set(&payload)?;
//! let mut response = [0u8; 32];
//! service.set_response(&mut response)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

#[cfg(test)]
pub(crate) mod test_utils;

pub use adapters::InMemoryBlockStore;
#[cfg(feature = "file-store")]
pub use adapters::FileBlockStore;
pub use domain::{
    ConfigRecord, StatusFlags, StoreConfig, StoreConfigBuilder, RECORD_SIZE, RESPONSE_SIZE,
};
pub use error::{BlockStoreError, ConfigError};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{BlockStore, ConfigUpdateApi};
pub use service::ConfigStoreService;
