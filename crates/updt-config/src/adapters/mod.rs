//! # Adapters Module
//!
//! Block-store implementations for the `BlockStore` port.
//!
//! - `storage::InMemoryBlockStore`: RAM image, access counters
//! - `storage::FileBlockStore`: locked image file (feature `file-store`)

pub mod storage;

#[cfg(feature = "file-store")]
pub use storage::FileBlockStore;
pub use storage::InMemoryBlockStore;
