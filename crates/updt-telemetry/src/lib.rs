//! # UPDT Telemetry
//!
//! Logging setup shared by the UPDT configuration workspace.
//!
//! The library crates only emit `tracing` events. Installing a subscriber is
//! the host's job, done once at startup through [`init_tracing`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use updt_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_tracing(&config).expect("Failed to init tracing");
//!
//!     // Update handling runs here
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `UPDT_SERVICE_NAME` | `updt` | Service name stamped on events |
//! | `UPDT_LOG_LEVEL` | `info` | Log level filter |
//! | `UPDT_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `UPDT_JSON_LOGS` | `false` | JSON formatted events |

#![warn(missing_docs)]

mod config;
mod logging;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{init_test_tracing, init_tracing};

use thiserror::Error;

/// Subsystem tag stamped on every configuration-store event.
pub const SUBSYSTEM: &str = "updt-config";

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log level string could not be parsed into a filter.
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// Filter directive as configured
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
