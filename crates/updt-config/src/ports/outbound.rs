//! # Outbound Ports (Driven Ports)
//!
//! Storage the configuration store needs the host to provide.

use crate::error::BlockStoreError;

/// Positioned byte storage holding the configuration region.
///
/// Production: the device flash driver.
/// Testing: `InMemoryBlockStore`, `FileBlockStore`.
///
/// One holder at a time. The coordinator does no locking of its own.
pub trait BlockStore {
    /// Read exactly `len` bytes at `offset`.
    ///
    /// Adapters may return fewer bytes at end of device; the caller rejects
    /// short reads through the codec length check.
    fn read(&mut self, offset: u64, len: usize) -> Result<Vec<u8>, BlockStoreError>;

    /// Write `data` at `offset`, returning the number of bytes written.
    fn write(&mut self, offset: u64, data: &[u8]) -> Result<usize, BlockStoreError>;
}

impl<B: BlockStore + ?Sized> BlockStore for Box<B> {
    fn read(&mut self, offset: u64, len: usize) -> Result<Vec<u8>, BlockStoreError> {
        (**self).read(offset, len)
    }

    fn write(&mut self, offset: u64, data: &[u8]) -> Result<usize, BlockStoreError> {
        (**self).write(offset, data)
    }
}
