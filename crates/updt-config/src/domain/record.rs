//! # Configuration Record
//!
//! One snapshot of the device firmware/application identity and versions.
//!
//! ## Field Contracts
//!
//! | Field | Width | Mutability |
//! |-------|-------|------------|
//! | `reserved1` | 8 | must be 0 |
//! | `firmware_version` | 24 | mutable, monotonic (warn) |
//! | `bootloader_flags` | 8 | immutable |
//! | `bootloader_version` | 24 | immutable |
//! | `reserved2` | 8 | must be 0 |
//! | `application_version` | 24 | mutable, monotonic (warn) |
//! | `vendor_id` | 8 | identity |
//! | `model_id` | 24 | identity |
//! | `unique_id` | 64 | identity |
//! | `data_size` | 32 | informational |
//!
//! 24-bit fields are held in `u32`; values above [`U24_MAX`] are not
//! representable on the wire and are rejected by the encoder.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Encoded record size on the wire and in the block store.
pub const RECORD_SIZE: usize = 28;

/// Size of the legacy configuration region constant (0x18).
///
/// The region was declared 24 bytes while every parse/format path moves 28;
/// the missing 4 bytes are `data_size`. [`RECORD_SIZE`] is authoritative.
pub const CONFIG_REGION_SIZE: usize = 0x18;

/// Response size: encoded record followed by the big-endian status word.
pub const RESPONSE_SIZE: usize = RECORD_SIZE + 4;

/// Largest value a 24-bit sub-field can carry.
pub const U24_MAX: u32 = 0x00FF_FFFF;

/// Device configuration record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigRecord {
    pub reserved1: u8,
    pub firmware_version: u32,
    pub bootloader_flags: u8,
    pub bootloader_version: u32,
    pub reserved2: u8,
    pub application_version: u32,
    pub vendor_id: u8,
    pub model_id: u32,
    pub unique_id: u64,
    pub data_size: u32,
}

impl ConfigRecord {
    /// Check every 24-bit field against [`U24_MAX`].
    ///
    /// Reports the first offending field in wire order.
    pub fn check_widths(&self) -> Result<(), ConfigError> {
        let fields = [
            ("firmware_version", self.firmware_version),
            ("bootloader_version", self.bootloader_version),
            ("application_version", self.application_version),
            ("model_id", self.model_id),
        ];

        for (field, value) in fields {
            if value > U24_MAX {
                return Err(ConfigError::FieldOverflow {
                    field,
                    value: value as u64,
                    bits: 24,
                });
            }
        }
        Ok(())
    }

    /// Copy the two mutable version fields from an accepted candidate.
    ///
    /// Bootloader, identity, reserved and size fields are left untouched.
    pub fn merge_versions_from(&mut self, candidate: &ConfigRecord) {
        self.firmware_version = candidate.firmware_version;
        self.application_version = candidate.application_version;
    }
}
