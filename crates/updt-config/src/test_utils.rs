use crate::domain::{codec, ConfigRecord, RECORD_SIZE};
use crate::error::BlockStoreError;
use crate::ports::outbound::BlockStore;

/// Persisted record from the reference upgrade scenario.
pub fn device_record() -> ConfigRecord {
    ConfigRecord {
        firmware_version: 1,
        bootloader_flags: 0,
        bootloader_version: 2,
        application_version: 1,
        vendor_id: 5,
        model_id: 9,
        unique_id: 12345,
        ..Default::default()
    }
}

/// Candidate that cleanly upgrades `device_record`.
pub fn upgrade_record() -> ConfigRecord {
    ConfigRecord {
        firmware_version: 2,
        application_version: 2,
        ..device_record()
    }
}

pub fn payload(record: &ConfigRecord) -> [u8; RECORD_SIZE] {
    codec::encode(record).unwrap()
}

/// Block store whose reads or writes misbehave on demand.
#[derive(Default)]
pub struct FaultyBlockStore {
    pub contents: Vec<u8>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    /// Accept at most this many bytes per write.
    pub write_limit: Option<usize>,
}

impl FaultyBlockStore {
    pub fn holding(record: &ConfigRecord) -> Self {
        Self {
            contents: payload(record).to_vec(),
            ..Self::default()
        }
    }
}

impl BlockStore for FaultyBlockStore {
    fn read(&mut self, offset: u64, len: usize) -> Result<Vec<u8>, BlockStoreError> {
        if self.fail_reads {
            return Err(BlockStoreError::Io {
                message: "read fault".to_string(),
            });
        }
        let start = (offset as usize).min(self.contents.len());
        let end = (start + len).min(self.contents.len());
        Ok(self.contents[start..end].to_vec())
    }

    fn write(&mut self, offset: u64, data: &[u8]) -> Result<usize, BlockStoreError> {
        if self.fail_writes {
            return Err(BlockStoreError::Io {
                message: "write fault".to_string(),
            });
        }
        let n = self.write_limit.map_or(data.len(), |limit| limit.min(data.len()));
        let start = offset as usize;
        if self.contents.len() < start + n {
            self.contents.resize(start + n, 0);
        }
        self.contents[start..start + n].copy_from_slice(&data[..n]);
        Ok(n)
    }
}
