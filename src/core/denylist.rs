//! Denylist Module
//!
//! Turns env-supplied plaintext blobs into lookup sets. Lists are rebuilt on
//! every request; nothing here caches or persists.

use std::collections::HashSet;

/// A set of lowercase, trimmed denylist tokens (addresses or ENS-style
/// names).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist(HashSet<String>);

impl Denylist {
    /// Parse a raw delimited blob into a token set.
    ///
    /// Splits on any run of carriage returns, line feeds, or commas; trims
    /// and lowercases each token; drops tokens that are empty after
    /// trimming. Absent input is an empty set, never an error. No size bound
    /// is enforced here.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let tokens = raw
            .split(|c: char| matches!(c, '\r' | '\n' | ','))
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect();
        Self(tokens)
    }

    /// Exact-membership lookup. Callers pass already-normalized keys.
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge another list into this one. Used to union the two sanctions
    /// sources.
    pub fn union(mut self, other: Denylist) -> Self {
        self.0.extend(other.0);
        self
    }
}

/// The three effective lists a single evaluation runs against.
#[derive(Debug, Clone, Default)]
pub struct ResolvedLists {
    /// Union of the two sanctions sources.
    pub ofac: Denylist,
    /// Internal bad list.
    pub badlist: Denylist,
    /// ENS bad list. Resolved for completeness; the policy does not consult
    /// it yet.
    pub bad_ens: Denylist,
}
