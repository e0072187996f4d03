//! Core Module - Screening Pipeline
//!
//! The pure per-request pipeline: list parsing, address normalization, risk
//! evaluation, response shaping. No I/O and no state between requests.

pub mod address;
pub mod denylist;
pub mod evaluator;
pub mod response;

pub use address::*;
pub use denylist::*;
pub use evaluator::*;
pub use response::*;
