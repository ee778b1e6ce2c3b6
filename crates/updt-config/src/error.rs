//! Error types for the configuration store.
//!
//! Validation outcomes are not errors. They travel as [`StatusFlags`] so a
//! single call reports every failing check at once. The variants here cover
//! malformed input, caller misuse and block-store failures.
//!
//! [`StatusFlags`]: crate::domain::StatusFlags

use thiserror::Error;

/// Errors raised by the codec and the store coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Input does not match the fixed record size.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Caller-supplied output buffer is too small.
    #[error("Buffer too small: need {required} bytes, have {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// An operation needing the block store ran before `init`.
    #[error("Block store not initialized")]
    NotInitialized,

    /// `write` ran before any record was read from the block store.
    #[error("No persisted record loaded")]
    NoRecordLoaded,

    /// A field value does not fit its declared bit width.
    #[error("Field {field} value {value:#x} exceeds {bits} bits")]
    FieldOverflow {
        field: &'static str,
        value: u64,
        bits: u32,
    },

    /// The block store accepted fewer bytes than the record size.
    #[error("Short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    /// Store configuration rejected by validation.
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    /// Underlying block-store failure, propagated unchanged.
    #[error("Block store error: {0}")]
    Store(#[from] BlockStoreError),
}

/// Errors from block-store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockStoreError {
    /// I/O error during read/write.
    #[error("Block store I/O error: {message}")]
    Io { message: String },

    /// Access past the end of the device.
    #[error("Access out of bounds: offset {offset} len {len} (capacity {capacity})")]
    OutOfBounds {
        offset: u64,
        len: usize,
        capacity: u64,
    },

    /// Another holder already owns the device.
    #[error("Block store locked: {path}")]
    Locked { path: String },
}

impl From<std::io::Error> for BlockStoreError {
    fn from(err: std::io::Error) -> Self {
        BlockStoreError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidLength {
            expected: 28,
            actual: 27,
        };
        let msg = err.to_string();
        assert!(msg.contains("28"));
        assert!(msg.contains("27"));
    }

    #[test]
    fn test_field_overflow_display() {
        let err = ConfigError::FieldOverflow {
            field: "firmware_version",
            value: 0x0100_0000,
            bits: 24,
        };
        let msg = err.to_string();
        assert!(msg.contains("firmware_version"));
        assert!(msg.contains("0x1000000"));
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = BlockStoreError::Io {
            message: "flash timeout".to_string(),
        };
        let err: ConfigError = store_err.into();

        match err {
            ConfigError::Store(BlockStoreError::Io { message }) => {
                assert!(message.contains("flash timeout"));
            }
            _ => panic!("Expected Store(Io)"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: BlockStoreError = io.into();
        assert!(matches!(err, BlockStoreError::Io { .. }));
    }
}
