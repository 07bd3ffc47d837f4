//! Adapters for the Ledger's outbound ports.

pub mod sinks;

pub use sinks::*;
