//! # Ports Layer
//!
//! - `inbound.rs` - Driving port (API exposed to the update transport)
//! - `outbound.rs` - Driven port (block store required by the service)

pub mod inbound;
pub mod outbound;

pub use inbound::ConfigUpdateApi;
pub use outbound::BlockStore;
