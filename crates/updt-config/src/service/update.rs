//! # Config Update API Implementation
//!
//! State in the service changes only once an outcome is final. A failed
//! read or write leaves an empty status and never a merged record the
//! block store does not hold.

use updt_telemetry::{log_event, log_update_event, SUBSYSTEM};

use super::*;
use crate::domain::{codec, validator, RECORD_SIZE, RESPONSE_SIZE};
use crate::error::ConfigError;
use crate::ports::inbound::ConfigUpdateApi;

impl<B, M> ConfigStoreService<B, M>
where
    B: BlockStore,
    M: MetricsRecorder,
{
    /// Read and decode the record at the configured offset.
    ///
    /// A failed read forgets the previous record: the device contents are
    /// unknown from then on.
    fn load_persisted(&mut self) -> Result<ConfigRecord, ConfigError> {
        self.persisted = None;

        let offset = self.config.config_offset;
        let store = self.store.as_mut().ok_or(ConfigError::NotInitialized)?;

        let bytes = store.read(offset, RECORD_SIZE)?;
        let record = codec::decode(&bytes)?;

        self.persisted = Some(record);
        Ok(record)
    }

    /// Validate a well-sized payload and write it through when accepted.
    ///
    /// Leaves `status` and metrics to the caller.
    fn apply(&mut self, payload: &[u8]) -> Result<StatusFlags, ConfigError> {
        let candidate = codec::decode(payload)?;
        let persisted = self.load_persisted()?;

        let status = validator::check(&candidate, &persisted);
        if !status.is_accepted() {
            return Ok(status);
        }

        self.pending = Some(candidate);
        self.write()?;
        Ok(status)
    }
}

impl<B, M> ConfigUpdateApi for ConfigStoreService<B, M>
where
    B: BlockStore,
    M: MetricsRecorder,
{
    fn set(&mut self, payload: &[u8]) -> Result<StatusFlags, ConfigError> {
        self.pending = None;

        if payload.len() != RECORD_SIZE {
            self.status = StatusFlags::INVALID_LENGTH;
            self.metrics.record_set(self.status);
            log_update_event!(
                warn,
                SUBSYSTEM,
                "Configuration payload has wrong length",
                self.status.bits(),
                len = payload.len()
            );
            return Ok(self.status);
        }

        let status = match self.apply(payload) {
            Ok(status) => status,
            Err(err) => {
                self.status = StatusFlags::empty();
                log_event!(
                    error,
                    SUBSYSTEM,
                    "Configuration update failed",
                    error = %err
                );
                return Err(err);
            }
        };

        self.status = status;
        self.metrics.record_set(status);

        if status.is_accepted() {
            log_update_event!(
                info,
                SUBSYSTEM,
                "Configuration update accepted",
                status.bits(),
                warnings = ?status.warnings().flag_names()
            );
        } else {
            log_update_event!(
                warn,
                SUBSYSTEM,
                "Configuration update rejected",
                status.bits(),
                flags = ?status.flag_names()
            );
        }
        Ok(status)
    }

    fn write(&mut self) -> Result<usize, ConfigError> {
        let offset = self.config.config_offset;
        let store = self.store.as_mut().ok_or(ConfigError::NotInitialized)?;
        let mut next = self.persisted.ok_or(ConfigError::NoRecordLoaded)?;

        if let Some(candidate) = self.pending.take() {
            next.merge_versions_from(&candidate);
        }

        let bytes = codec::encode(&next)?;
        let written = store.write(offset, &bytes)?;
        if written < RECORD_SIZE {
            return Err(ConfigError::ShortWrite {
                written,
                expected: RECORD_SIZE,
            });
        }

        self.persisted = Some(next);
        self.metrics.record_write(written);
        log_event!(
            debug,
            SUBSYSTEM,
            "Configuration record written",
            offset = offset,
            bytes = written,
            firmware_version = next.firmware_version,
            application_version = next.application_version
        );
        Ok(written)
    }

    fn set_response(&self, dest: &mut [u8]) -> Result<usize, ConfigError> {
        if dest.len() < RESPONSE_SIZE {
            return Err(ConfigError::BufferTooSmall {
                required: RESPONSE_SIZE,
                actual: dest.len(),
            });
        }

        let record = self.persisted.unwrap_or_default();
        codec::encode_into(&record, dest)?;
        dest[RECORD_SIZE..RESPONSE_SIZE].copy_from_slice(&self.status.to_be_bytes());

        Ok(RESPONSE_SIZE)
    }
}
