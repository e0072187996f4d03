//! Address Normalizer
//!
//! Canonicalizes candidate addresses into the lowercase hex form used as the
//! sole denylist lookup key. Normalization is total: bad input yields `None`,
//! never an error.

use std::fmt;

use serde::Serialize;

use crate::utils::constants::{ADDRESS_HEX_LEN, ADDRESS_PREFIX};

/// A validated `0x` + 40 lowercase hex digit address.
///
/// Only constructed through [`normalize_address`], so downstream code never
/// sees a partial or mixed-case value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedAddress(String);

impl NormalizedAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate and canonicalize a candidate address.
///
/// Trims surrounding whitespace and lowercases, then requires the `0x`
/// marker followed by exactly 40 hex digits. Syntactic check only: no
/// checksum verification, no existence check against a chain.
pub fn normalize_address(raw: Option<&str>) -> Option<NormalizedAddress> {
    let candidate = raw?.trim().to_lowercase();
    let digits = candidate.strip_prefix(ADDRESS_PREFIX)?;
    if digits.len() != ADDRESS_HEX_LEN || hex::decode(digits).is_err() {
        return None;
    }
    Some(NormalizedAddress(candidate))
}
