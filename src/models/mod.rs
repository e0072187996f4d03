//! Models Module - Configuration & Error Types
//!
//! Startup configuration snapshots and the client-visible error type.

pub mod config;
pub mod errors;

pub use config::*;
pub use errors::*;
