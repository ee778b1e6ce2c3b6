//! # Candidate Validator
//!
//! Compares a candidate record with the persisted one. Every check runs on
//! every call and the bits are OR-ed together, so a caller sees all failures
//! of a payload at once.

use super::record::ConfigRecord;
use super::status::StatusFlags;

/// Reserved bytes must be zero in the candidate.
fn check_reserved(candidate: &ConfigRecord) -> StatusFlags {
    if candidate.reserved1 != 0 || candidate.reserved2 != 0 {
        StatusFlags::RESERVED_NONZERO
    } else {
        StatusFlags::empty()
    }
}

/// The bootloader is fixed at build time. A candidate may not declare flags,
/// and the stored bootloader version floors the candidate application version.
fn check_bootloader(candidate: &ConfigRecord, persisted: &ConfigRecord) -> StatusFlags {
    let mut status = StatusFlags::empty();
    if candidate.bootloader_flags != 0 {
        status |= StatusFlags::BOOTLOADER_FLAGS_CHANGED;
    }
    // Stored bootloader version against the candidate *application* version.
    if persisted.bootloader_version > candidate.application_version {
        status |= StatusFlags::BOOTLOADER_VERSION_VIOLATION;
    }
    status
}

fn check_identity(candidate: &ConfigRecord, persisted: &ConfigRecord) -> StatusFlags {
    let mut status = StatusFlags::empty();
    status.set(
        StatusFlags::VENDOR_MISMATCH,
        persisted.vendor_id != candidate.vendor_id,
    );
    status.set(
        StatusFlags::MODEL_MISMATCH,
        persisted.model_id != candidate.model_id,
    );
    status.set(
        StatusFlags::UNIQUE_ID_MISMATCH,
        persisted.unique_id != candidate.unique_id,
    );
    status
}

fn check_versions(candidate: &ConfigRecord, persisted: &ConfigRecord) -> StatusFlags {
    let mut status = StatusFlags::empty();
    status.set(
        StatusFlags::FIRMWARE_VERSION_NOT_INCREASED,
        persisted.firmware_version >= candidate.firmware_version,
    );
    status.set(
        StatusFlags::APPLICATION_VERSION_NOT_INCREASED,
        persisted.application_version >= candidate.application_version,
    );
    status
}

/// Validate `candidate` against `persisted`.
pub fn check(candidate: &ConfigRecord, persisted: &ConfigRecord) -> StatusFlags {
    check_reserved(candidate)
        | check_bootloader(candidate, persisted)
        | check_identity(candidate, persisted)
        | check_versions(candidate, persisted)
}
