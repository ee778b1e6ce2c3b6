//! # Inbound Ports (Driving Ports)
//!
//! The API the update transport drives.

use crate::domain::StatusFlags;
use crate::error::ConfigError;

/// Configuration update API.
///
/// Calls must be serialized by the caller: `set` is a read-modify-write on
/// the shared block store.
pub trait ConfigUpdateApi {
    /// Validate a 28-byte candidate payload and persist it if accepted.
    ///
    /// Validation failures come back as flags in `Ok`; `Err` is reserved for
    /// a missing block store and store I/O failures.
    fn set(&mut self, payload: &[u8]) -> Result<StatusFlags, ConfigError>;

    /// Merge the last accepted candidate into the persisted record and write
    /// it to the block store. Returns the number of bytes written.
    fn write(&mut self) -> Result<usize, ConfigError>;

    /// Encode the persisted record and the last status into `dest`.
    ///
    /// Returns the number of bytes written (always 32).
    fn set_response(&self, dest: &mut [u8]) -> Result<usize, ConfigError>;
}
