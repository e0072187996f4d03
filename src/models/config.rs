//! Configuration Module
//!
//! Env-supplied configuration, snapshotted once at startup into plain
//! structs that handlers receive by injection. Fixtures go in through the
//! same structs, so tests never touch the process environment.

use std::env;

use crate::core::denylist::{Denylist, ResolvedLists};
use crate::utils::constants::{
    DEFAULT_HOST, DEFAULT_PORT, ENV_BAD_ENS, ENV_BAD_LIST, ENV_HOST, ENV_OFAC_LIST, ENV_OFAC_SET,
    ENV_PLATFORM_PORT, ENV_PORT,
};

/// Raw plaintext list blobs as supplied by the environment.
///
/// Kept raw so every request parses its own sets; only the env read itself
/// happens once, at startup.
#[derive(Debug, Clone, Default)]
pub struct ListSources {
    /// Primary sanctions source (`OFACLIST`).
    pub ofac_primary: Option<String>,
    /// Secondary sanctions source (`OFAC_SET`), unioned with the primary.
    pub ofac_secondary: Option<String>,
    /// Internal bad list (`BADLIST`).
    pub badlist: Option<String>,
    /// ENS bad list (`BAD_ENS`), reserved for future ENS screening.
    pub bad_ens: Option<String>,
}

impl ListSources {
    /// Snapshot the four list variables from the environment.
    /// List contents are never logged from here or anywhere else.
    pub fn from_env() -> Self {
        Self {
            ofac_primary: read_env(ENV_OFAC_LIST),
            ofac_secondary: read_env(ENV_OFAC_SET),
            badlist: read_env(ENV_BAD_LIST),
            bad_ens: read_env(ENV_BAD_ENS),
        }
    }

    /// Parse the blobs into the three effective lookup sets. Called per
    /// request; the parsed sets are never cached.
    pub fn resolve(&self) -> ResolvedLists {
        ResolvedLists {
            ofac: Denylist::parse(self.ofac_primary.as_deref())
                .union(Denylist::parse(self.ofac_secondary.as_deref())),
            badlist: Denylist::parse(self.badlist.as_deref()),
            bad_ens: Denylist::parse(self.bad_ens.as_deref()),
        }
    }

    /// Entry counts per configured source, for startup logging and the
    /// sanity endpoint. Sizes only.
    pub fn counts(&self) -> SourceCounts {
        SourceCounts {
            ofac_primary: Denylist::parse(self.ofac_primary.as_deref()).len(),
            ofac_secondary: Denylist::parse(self.ofac_secondary.as_deref()).len(),
            badlist: Denylist::parse(self.badlist.as_deref()).len(),
            bad_ens: Denylist::parse(self.bad_ens.as_deref()).len(),
        }
    }
}

/// Entry counts per list source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub ofac_primary: usize,
    pub ofac_secondary: usize,
    pub badlist: usize,
    pub bad_ens: usize,
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read bind host/port from the environment. The platform-assigned
    /// `PORT` wins over `SAFESEND_PORT`, as on the usual container hosts.
    pub fn from_env() -> Self {
        let host = env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var(ENV_PLATFORM_PORT)
            .or_else(|_| env::var(ENV_PORT))
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
