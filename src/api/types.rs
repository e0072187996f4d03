//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::core::address::NormalizedAddress;
use crate::models::config::ListSources;
use crate::utils::constants::{ANALYTICS_NOTE, DEFAULT_NETWORK, SANITY_NOTE, VERSION};

/// Query parameters shared by `/check` and `/analytics`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckParams {
    pub address: Option<String>,
    pub chain: Option<String>,
    pub network: Option<String>,
}

impl CheckParams {
    /// Network label for the response: `chain` wins over `network`, empty
    /// strings count as absent, and the fallback is "unknown". Purely a
    /// label; it does not change the evaluation.
    pub fn network_label(&self) -> String {
        self.chain
            .as_deref()
            .filter(|value| !value.is_empty())
            .or_else(|| self.network.as_deref().filter(|value| !value.is_empty()))
            .unwrap_or(DEFAULT_NETWORK)
            .to_string()
    }
}

// ============================================
// Status (liveness)
// ============================================

#[derive(Debug, Serialize)]
pub struct StatusData {
    pub version: &'static str,
    pub ok: bool,
}

impl StatusData {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            ok: true,
        }
    }
}

// ============================================
// Sanity (configuration visibility)
// ============================================

/// `/sanity` payload: configured list sizes only, never contents.
#[derive(Debug, Serialize)]
pub struct SanityData {
    pub version: &'static str,
    pub env_present: EnvPresence,
    pub note: &'static str,
}

impl SanityData {
    pub fn from_sources(sources: &ListSources) -> Self {
        Self {
            version: VERSION,
            env_present: EnvPresence::from_sources(sources),
            note: SANITY_NOTE,
        }
    }
}

/// Per-source entry counts keyed by env var name. A source parsing to zero
/// entries is omitted entirely, which is how operators probe for unset or
/// misdelimited vars.
#[derive(Debug, Serialize)]
pub struct EnvPresence {
    #[serde(rename = "OFACLIST", skip_serializing_if = "Option::is_none")]
    pub ofac_primary: Option<usize>,
    #[serde(rename = "OFAC_SET", skip_serializing_if = "Option::is_none")]
    pub ofac_secondary: Option<usize>,
    #[serde(rename = "BADLIST", skip_serializing_if = "Option::is_none")]
    pub badlist: Option<usize>,
    #[serde(rename = "BAD_ENS", skip_serializing_if = "Option::is_none")]
    pub bad_ens: Option<usize>,
}

impl EnvPresence {
    pub fn from_sources(sources: &ListSources) -> Self {
        let counts = sources.counts();
        Self {
            ofac_primary: nonzero(counts.ofac_primary),
            ofac_secondary: nonzero(counts.ofac_secondary),
            badlist: nonzero(counts.badlist),
            bad_ens: nonzero(counts.bad_ens),
        }
    }
}

fn nonzero(count: usize) -> Option<usize> {
    (count > 0).then_some(count)
}

// ============================================
// Analytics (stub)
// ============================================

/// `/analytics` payload. Every enrichment field is a hardcoded placeholder
/// and the note says so; consumers must not treat this as an evaluation.
#[derive(Debug, Serialize)]
pub struct AnalyticsData {
    pub version: &'static str,
    pub address: NormalizedAddress,
    pub network: String,
    pub sanctions: SanctionsStub,
    pub exposures: ExposuresStub,
    pub heuristics: HeuristicsStub,
    pub note: &'static str,
}

impl AnalyticsData {
    pub fn stub(address: NormalizedAddress, network: String) -> Self {
        Self {
            version: VERSION,
            address,
            network,
            sanctions: SanctionsStub { hit: false },
            exposures: ExposuresStub {
                mixer: false,
                scam: false,
            },
            heuristics: HeuristicsStub { age_days: None },
            note: ANALYTICS_NOTE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SanctionsStub {
    pub hit: bool,
}

#[derive(Debug, Serialize)]
pub struct ExposuresStub {
    pub mixer: bool,
    pub scam: bool,
}

#[derive(Debug, Serialize)]
pub struct HeuristicsStub {
    /// Serializes as an explicit null until an enrichment backend exists.
    #[serde(rename = "ageDays")]
    pub age_days: Option<u32>,
}
