use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::StoreConfig;
use crate::error::BlockStoreError;
use crate::ports::outbound::BlockStore;

/// File-backed block store.
///
/// Mirrors the flash device through an image file on the host. The file is
/// held under an exclusive advisory lock for the lifetime of the store, so a
/// second holder fails fast with `BlockStoreError::Locked` instead of racing
/// the read-modify-write in `set`.
pub struct FileBlockStore {
    file: File,
    path: PathBuf,
}

impl FileBlockStore {
    /// Open (or create) an image file and lock it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BlockStoreError> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        file.try_lock_exclusive()
            .map_err(|_| BlockStoreError::Locked {
                path: path.display().to_string(),
            })?;

        tracing::debug!(path = %path.display(), "Block store image opened");

        Ok(Self { file, path })
    }

    /// Open an image and grow it to cover the configured region.
    ///
    /// Existing contents are preserved; new bytes read as zero.
    pub fn create<P: AsRef<Path>>(path: P, config: &StoreConfig) -> Result<Self, BlockStoreError> {
        let required = config
            .config_offset
            .checked_add(config.region_capacity as u64)
            .ok_or(BlockStoreError::OutOfBounds {
                offset: config.config_offset,
                len: config.region_capacity,
                capacity: u64::MAX,
            })?;
        let store = Self::open(path)?;
        if store.file.metadata()?.len() < required {
            store.file.set_len(required)?;
        }
        Ok(store)
    }

    /// Path of the backing image.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlockStore for FileBlockStore {
    fn read(&mut self, offset: u64, len: usize) -> Result<Vec<u8>, BlockStoreError> {
        self.file.seek(SeekFrom::Start(offset))?;

        let mut buf = Vec::with_capacity(len);
        (&mut self.file).take(len as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn write(&mut self, offset: u64, data: &[u8]) -> Result<usize, BlockStoreError> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(data)?;
        self.file.sync_data()?;
        Ok(data.len())
    }
}

impl Drop for FileBlockStore {
    fn drop(&mut self) {
        #[allow(clippy::incompatible_msrv)]
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flash.img");

        let mut store = FileBlockStore::create(&path, &StoreConfig::default()).unwrap();
        assert_eq!(store.read(0, 28).unwrap(), vec![0u8; 28]);

        assert_eq!(store.write(2, b"cfg").unwrap(), 3);
        assert_eq!(store.read(0, 6).unwrap(), vec![0, 0, b'c', b'f', b'g', 0]);
    }

    #[test]
    fn test_contents_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flash.img");

        {
            let mut store = FileBlockStore::create(&path, &StoreConfig::default()).unwrap();
            store.write(0, &[0xAB; 28]).unwrap();
        }

        let mut store = FileBlockStore::open(&path).unwrap();
        assert_eq!(store.read(0, 28).unwrap(), vec![0xAB; 28]);
    }

    #[test]
    fn test_short_read_at_end_of_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flash.img");

        let mut store = FileBlockStore::open(&path).unwrap();
        store.write(0, &[1u8; 10]).unwrap();
        assert_eq!(store.read(0, 28).unwrap().len(), 10);
    }

    #[test]
    fn test_second_holder_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flash.img");

        let _first = FileBlockStore::open(&path).unwrap();
        let second = FileBlockStore::open(&path);
        assert!(matches!(second, Err(BlockStoreError::Locked { .. })));
    }

    #[test]
    fn test_create_rejects_wrapping_region() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flash.img");
        let config = StoreConfig {
            config_offset: u64::MAX - 4,
            region_capacity: 28,
        };

        let result = FileBlockStore::create(&path, &config);
        assert!(matches!(result, Err(BlockStoreError::OutOfBounds { .. })));
        assert!(!path.exists());
    }
}
