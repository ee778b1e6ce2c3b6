//! Storage Adapters
//!
//! Implementations of the `BlockStore` trait.

#[cfg(feature = "file-store")]
mod file;
mod memory;

#[cfg(feature = "file-store")]
pub use file::FileBlockStore;
pub use memory::InMemoryBlockStore;
