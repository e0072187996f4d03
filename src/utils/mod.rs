//! Utils Module - Shared Constants
//!
//! Single Source of Truth for every fixed wire value.

pub mod constants;

pub use constants::*;
