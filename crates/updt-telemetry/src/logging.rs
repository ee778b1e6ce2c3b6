//! Structured log helpers.
//!
//! Events carry a `subsystem` field so logs from the configuration store can
//! be filtered out of a shared device log.

/// Emit an event tagged with a subsystem.
///
/// The calling crate must depend on `tracing`.
#[macro_export]
macro_rules! log_event {
    (info, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    (error, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };
}

/// Emit an event about a configuration update with the status word attached.
///
/// The status is rendered as hex so error and warning halves read at a glance.
#[macro_export]
macro_rules! log_update_event {
    ($level:ident, $subsystem:expr, $msg:expr, $status:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            status = %format!("{:#010x}", $status),
            $($($field)*,)?
            $msg
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::SUBSYSTEM;

    #[test]
    fn test_macros_expand_without_subscriber() {
        log_event!(info, SUBSYSTEM, "plain event");
        log_event!(debug, SUBSYSTEM, "event with fields", offset = 0u64, bytes = 28usize);
        log_update_event!(warn, SUBSYSTEM, "update rejected", 0x0000_0010u32, len = 27usize);
    }
}
