use crate::domain::StoreConfig;
use crate::error::BlockStoreError;
use crate::ports::outbound::BlockStore;

/// RAM-backed block store.
///
/// Stands in for flash in tests and host-side tooling. Counts every access
/// so callers can assert that a rejected payload never touched storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlockStore {
    data: Vec<u8>,
    reads: usize,
    writes: usize,
}

impl InMemoryBlockStore {
    /// Zero-filled device of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
            ..Self::default()
        }
    }

    /// Device sized to hold the configured region.
    ///
    /// Fails if the region end is not addressable on this host.
    pub fn for_config(config: &StoreConfig) -> Result<Self, BlockStoreError> {
        let unaddressable = || BlockStoreError::OutOfBounds {
            offset: config.config_offset,
            len: config.region_capacity,
            capacity: usize::MAX as u64,
        };
        let offset = usize::try_from(config.config_offset).map_err(|_| unaddressable())?;
        let end = offset
            .checked_add(config.region_capacity)
            .ok_or_else(unaddressable)?;
        Ok(Self::new(end))
    }

    /// Device pre-loaded with `contents`.
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            data: contents.into(),
            ..Self::default()
        }
    }

    /// Raw device contents.
    pub fn contents(&self) -> &[u8] {
        &self.data
    }

    /// Number of `read` calls served.
    pub fn read_count(&self) -> usize {
        self.reads
    }

    /// Number of `write` calls served.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn range(&self, offset: u64, len: usize) -> Result<std::ops::Range<usize>, BlockStoreError> {
        let out_of_bounds = || BlockStoreError::OutOfBounds {
            offset,
            len,
            capacity: self.data.len() as u64,
        };
        let start = usize::try_from(offset).map_err(|_| out_of_bounds())?;
        let end = start.checked_add(len).ok_or_else(out_of_bounds)?;
        if end > self.data.len() {
            return Err(out_of_bounds());
        }
        Ok(start..end)
    }
}

impl BlockStore for InMemoryBlockStore {
    fn read(&mut self, offset: u64, len: usize) -> Result<Vec<u8>, BlockStoreError> {
        self.reads += 1;
        let range = self.range(offset, len)?;
        Ok(self.data[range].to_vec())
    }

    fn write(&mut self, offset: u64, data: &[u8]) -> Result<usize, BlockStoreError> {
        self.writes += 1;
        let range = self.range(offset, data.len())?;
        self.data[range].copy_from_slice(data);
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_read_write() {
        let mut store = InMemoryBlockStore::new(64);

        assert_eq!(store.write(4, b"flash").unwrap(), 5);
        assert_eq!(store.read(4, 5).unwrap(), b"flash".to_vec());
        assert_eq!(store.read(0, 4).unwrap(), vec![0; 4]);
        assert_eq!(store.read_count(), 2);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut store = InMemoryBlockStore::new(28);

        assert!(store.read(0, 28).is_ok());
        assert!(matches!(
            store.read(1, 28),
            Err(BlockStoreError::OutOfBounds { capacity: 28, .. })
        ));
        assert!(matches!(
            store.write(u64::MAX, b"x"),
            Err(BlockStoreError::OutOfBounds { .. })
        ));
        assert_eq!(store.contents(), &[0u8; 28][..]);
    }

    #[test]
    fn test_for_config() {
        let config = StoreConfig::new(0x100, 32).unwrap();
        let store = InMemoryBlockStore::for_config(&config).unwrap();
        assert_eq!(store.contents().len(), 0x120);
    }

    #[test]
    fn test_for_config_rejects_unaddressable_region() {
        // Public fields let a caller skip `StoreConfig::validate`.
        let config = StoreConfig {
            config_offset: u64::MAX,
            region_capacity: 28,
        };
        assert!(matches!(
            InMemoryBlockStore::for_config(&config),
            Err(BlockStoreError::OutOfBounds {
                offset: u64::MAX,
                len: 28,
                ..
            })
        ));
    }
}
