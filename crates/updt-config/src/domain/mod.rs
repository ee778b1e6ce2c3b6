//! # Domain Layer
//!
//! Pure logic for the configuration block. No I/O happens here.
//!
//! ## Modules
//!
//! - `record` - `ConfigRecord` and the size constants
//! - `codec` - 28-byte big-endian encode/decode
//! - `status` - `StatusFlags` error/warning bits
//! - `validator` - candidate vs persisted checks
//! - `config` - where the record lives in the block store

pub mod codec;
pub mod config;
pub mod record;
pub mod status;
pub mod validator;

pub use config::{StoreConfig, StoreConfigBuilder, DEFAULT_CONFIG_OFFSET};
pub use record::{ConfigRecord, CONFIG_REGION_SIZE, RECORD_SIZE, RESPONSE_SIZE, U24_MAX};
pub use status::StatusFlags;
