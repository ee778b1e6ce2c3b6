//! # Record Codec
//!
//! Fixed big-endian layout, 28 bytes:
//!
//! ```text
//! offset  0: [reserved1:8][firmware_version:24]
//! offset  4: [bootloader_flags:8][bootloader_version:24]
//! offset  8: [reserved2:8][application_version:24]
//! offset 12: [vendor_id:8][model_id:24]
//! offset 16: [unique_id:64]
//! offset 24: [data_size:32]
//! ```
//!
//! Both directions are pure. Encoding refuses 24-bit fields that would not
//! survive the trip instead of truncating them.

use super::record::{ConfigRecord, RECORD_SIZE, U24_MAX};
use crate::error::ConfigError;

/// Split a packed word into its 8-bit head and 24-bit tail.
fn unpack_word(bytes: &[u8]) -> (u8, u32) {
    let word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    ((word >> 24) as u8, word & U24_MAX)
}

fn pack_word(head: u8, tail: u32) -> [u8; 4] {
    (((head as u32) << 24) | (tail & U24_MAX)).to_be_bytes()
}

/// Decode a record from exactly [`RECORD_SIZE`] bytes.
pub fn decode(bytes: &[u8]) -> Result<ConfigRecord, ConfigError> {
    if bytes.len() != RECORD_SIZE {
        return Err(ConfigError::InvalidLength {
            expected: RECORD_SIZE,
            actual: bytes.len(),
        });
    }

    let (reserved1, firmware_version) = unpack_word(&bytes[0..4]);
    let (bootloader_flags, bootloader_version) = unpack_word(&bytes[4..8]);
    let (reserved2, application_version) = unpack_word(&bytes[8..12]);
    let (vendor_id, model_id) = unpack_word(&bytes[12..16]);

    let mut unique_id = [0u8; 8];
    unique_id.copy_from_slice(&bytes[16..24]);
    let mut data_size = [0u8; 4];
    data_size.copy_from_slice(&bytes[24..28]);

    Ok(ConfigRecord {
        reserved1,
        firmware_version,
        bootloader_flags,
        bootloader_version,
        reserved2,
        application_version,
        vendor_id,
        model_id,
        unique_id: u64::from_be_bytes(unique_id),
        data_size: u32::from_be_bytes(data_size),
    })
}

/// Encode a record into the first [`RECORD_SIZE`] bytes of `dest`.
///
/// Returns the number of bytes written. Bytes past the record are untouched.
pub fn encode_into(record: &ConfigRecord, dest: &mut [u8]) -> Result<usize, ConfigError> {
    if dest.len() < RECORD_SIZE {
        return Err(ConfigError::BufferTooSmall {
            required: RECORD_SIZE,
            actual: dest.len(),
        });
    }
    record.check_widths()?;

    dest[0..4].copy_from_slice(&pack_word(record.reserved1, record.firmware_version));
    dest[4..8].copy_from_slice(&pack_word(
        record.bootloader_flags,
        record.bootloader_version,
    ));
    dest[8..12].copy_from_slice(&pack_word(record.reserved2, record.application_version));
    dest[12..16].copy_from_slice(&pack_word(record.vendor_id, record.model_id));
    dest[16..24].copy_from_slice(&record.unique_id.to_be_bytes());
    dest[24..28].copy_from_slice(&record.data_size.to_be_bytes());

    Ok(RECORD_SIZE)
}

/// Encode a record into a fresh array.
pub fn encode(record: &ConfigRecord) -> Result<[u8; RECORD_SIZE], ConfigError> {
    let mut out = [0u8; RECORD_SIZE];
    encode_into(record, &mut out)?;
    Ok(out)
}
