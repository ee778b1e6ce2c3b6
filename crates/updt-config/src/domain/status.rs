//! # Status Flags
//!
//! Outcome of validating one candidate record. Errors live in the low
//! half-word and block acceptance; warnings live in the high half-word and
//! are informational only.
//!
//! | Bit | Flag | Kind |
//! |-----|------|------|
//! | 0 | `INVALID_LENGTH` | error |
//! | 1 | `RESERVED_NONZERO` | error |
//! | 2 | `BOOTLOADER_FLAGS_CHANGED` | error |
//! | 3 | `BOOTLOADER_VERSION_VIOLATION` | error |
//! | 4 | `VENDOR_MISMATCH` | error |
//! | 5 | `MODEL_MISMATCH` | error |
//! | 6 | `UNIQUE_ID_MISMATCH` | error |
//! | 16 | `FIRMWARE_VERSION_NOT_INCREASED` | warning |
//! | 17 | `APPLICATION_VERSION_NOT_INCREASED` | warning |

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Error and warning bits accumulated by the validator.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct StatusFlags: u32 {
        /// Payload length differs from the record size
        const INVALID_LENGTH = 1 << 0;
        /// A reserved byte is nonzero
        const RESERVED_NONZERO = 1 << 1;
        /// Candidate declares bootloader flags
        const BOOTLOADER_FLAGS_CHANGED = 1 << 2;
        /// Stored bootloader version exceeds the candidate application version
        const BOOTLOADER_VERSION_VIOLATION = 1 << 3;
        /// Vendor id differs from the device
        const VENDOR_MISMATCH = 1 << 4;
        /// Model id differs from the device
        const MODEL_MISMATCH = 1 << 5;
        /// Unique id differs from the device
        const UNIQUE_ID_MISMATCH = 1 << 6;
        /// Firmware version does not move forward
        const FIRMWARE_VERSION_NOT_INCREASED = 1 << 16;
        /// Application version does not move forward
        const APPLICATION_VERSION_NOT_INCREASED = 1 << 17;
    }
}

impl StatusFlags {
    /// Every error bit.
    pub const ERRORS: Self = Self::INVALID_LENGTH
        .union(Self::RESERVED_NONZERO)
        .union(Self::BOOTLOADER_FLAGS_CHANGED)
        .union(Self::BOOTLOADER_VERSION_VIOLATION)
        .union(Self::VENDOR_MISMATCH)
        .union(Self::MODEL_MISMATCH)
        .union(Self::UNIQUE_ID_MISMATCH);

    /// Every warning bit.
    pub const WARNINGS: Self =
        Self::FIRMWARE_VERSION_NOT_INCREASED.union(Self::APPLICATION_VERSION_NOT_INCREASED);

    /// Identity checks only.
    pub const IDENTITY: Self = Self::VENDOR_MISMATCH
        .union(Self::MODEL_MISMATCH)
        .union(Self::UNIQUE_ID_MISMATCH);

    /// Error bits that are set.
    pub fn errors(self) -> Self {
        self & Self::ERRORS
    }

    /// Warning bits that are set.
    pub fn warnings(self) -> Self {
        self & Self::WARNINGS
    }

    /// True if any error bit is set.
    pub fn has_errors(self) -> bool {
        self.intersects(Self::ERRORS)
    }

    /// A candidate is accepted iff no error bit is set; warnings never block.
    pub fn is_accepted(self) -> bool {
        !self.has_errors()
    }

    /// Status word as sent to the requesting party.
    pub fn to_be_bytes(self) -> [u8; 4] {
        self.bits().to_be_bytes()
    }

    /// Rebuild from a status word, keeping unknown bits.
    pub fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self::from_bits_retain(u32::from_be_bytes(bytes))
    }

    /// Names of the set flags, for logs.
    pub fn flag_names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}
