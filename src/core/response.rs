//! Response Builder
//!
//! Shapes a [`RiskVerdict`] into the public wire response. Field order and
//! the version/policy/source strings are part of the client contract.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::core::address::NormalizedAddress;
use crate::core::evaluator::{ListMatches, RiskVerdict};
use crate::utils::constants::{POLICY_BLOCK, POLICY_WARN, SOURCE_PLAINTEXT, VERSION};

/// The wire-level risk response. Serialized field order matches what clients
/// already parse, so keep the declaration order stable.
#[derive(Debug, Clone, Serialize)]
pub struct RiskResponse {
    pub version: &'static str,
    pub address: NormalizedAddress,
    pub network: String,
    pub risk_score: u8,
    pub block: bool,
    pub reasons: Vec<&'static str>,
    pub risk_factors: Vec<&'static str>,
    pub policy: String,
    /// Response-build time, ISO-8601 UTC with millisecond precision.
    pub checked_at: String,
    pub source: &'static str,
    pub matched_in: ListMatches,
}

/// Assembles a [`RiskResponse`] from a verdict plus request context.
///
/// The policy text defaults from the block flag. Callers with a more
/// specific policy description can override it, and richer evaluation
/// backends can retag the source.
#[derive(Debug)]
pub struct RiskResponseBuilder {
    address: NormalizedAddress,
    network: String,
    verdict: RiskVerdict,
    policy: Option<String>,
    source: &'static str,
}

impl RiskResponseBuilder {
    pub fn new(
        address: NormalizedAddress,
        network: impl Into<String>,
        verdict: RiskVerdict,
    ) -> Self {
        Self {
            address,
            network: network.into(),
            verdict,
            policy: None,
            source: SOURCE_PLAINTEXT,
        }
    }

    /// Replace the derived policy text.
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = Some(policy.into());
        self
    }

    /// Tag the response as coming from a different evaluation backend.
    pub fn with_source(mut self, source: &'static str) -> Self {
        self.source = source;
        self
    }

    /// Build the response. The timestamp reflects this call, not request
    /// arrival.
    pub fn build(self) -> RiskResponse {
        let policy = self.policy.unwrap_or_else(|| {
            let text = if self.verdict.block {
                POLICY_BLOCK
            } else {
                POLICY_WARN
            };
            text.to_string()
        });

        RiskResponse {
            version: VERSION,
            address: self.address,
            network: self.network,
            risk_score: self.verdict.score,
            block: self.verdict.block,
            reasons: self.verdict.reasons,
            risk_factors: self.verdict.risk_factors,
            policy,
            checked_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            source: self.source,
            matched_in: self.verdict.matched_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::address::normalize_address;
    use crate::core::denylist::{Denylist, ResolvedLists};
    use crate::core::evaluator::evaluate;
    use crate::utils::constants::{SCORE_BASELINE, SCORE_LISTED};
    use chrono::DateTime;

    const ADDR: &str = "0x4444444444444444444444444444444444444444";

    fn addr() -> NormalizedAddress {
        normalize_address(Some(ADDR)).unwrap()
    }

    fn verdict(listed: bool) -> RiskVerdict {
        let lists = if listed {
            ResolvedLists {
                ofac: Denylist::parse(Some(ADDR)),
                ..ResolvedLists::default()
            }
        } else {
            ResolvedLists::default()
        };
        evaluate(&addr(), &lists)
    }

    #[test]
    fn test_policy_follows_block_flag() {
        let blocked = RiskResponseBuilder::new(addr(), "eth", verdict(true)).build();
        assert_eq!(blocked.policy, POLICY_BLOCK);
        assert_eq!(blocked.risk_score, SCORE_LISTED);
        assert!(blocked.block);

        let allowed = RiskResponseBuilder::new(addr(), "eth", verdict(false)).build();
        assert_eq!(allowed.policy, POLICY_WARN);
        assert_eq!(allowed.risk_score, SCORE_BASELINE);
        assert!(!allowed.block);
    }

    #[test]
    fn test_policy_override() {
        let response = RiskResponseBuilder::new(addr(), "eth", verdict(false))
            .with_policy("custom policy text")
            .build();
        assert_eq!(response.policy, "custom policy text");
    }

    #[test]
    fn test_version_and_source_tags() {
        let response = RiskResponseBuilder::new(addr(), "unknown", verdict(false)).build();
        assert_eq!(response.version, VERSION);
        assert_eq!(response.source, SOURCE_PLAINTEXT);

        let retagged = RiskResponseBuilder::new(addr(), "unknown", verdict(false))
            .with_source("plaintext:file")
            .build();
        assert_eq!(retagged.source, "plaintext:file");
    }

    #[test]
    fn test_checked_at_is_utc_millis() {
        let response = RiskResponseBuilder::new(addr(), "eth", verdict(false)).build();
        let parsed = DateTime::parse_from_rfc3339(&response.checked_at).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert!(response.checked_at.ends_with('Z'));
        // e.g. 2026-08-25T12:34:56.789Z
        assert_eq!(response.checked_at.len(), 24);
    }

    #[test]
    fn test_wire_field_order_is_stable() {
        let json =
            serde_json::to_string(&RiskResponseBuilder::new(addr(), "eth", verdict(true)).build())
                .unwrap();
        let positions: Vec<usize> = [
            "\"version\"",
            "\"address\"",
            "\"network\"",
            "\"risk_score\"",
            "\"block\"",
            "\"reasons\"",
            "\"risk_factors\"",
            "\"policy\"",
            "\"checked_at\"",
            "\"source\"",
            "\"matched_in\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_address_serializes_as_plain_string() {
        let json =
            serde_json::to_string(&RiskResponseBuilder::new(addr(), "eth", verdict(false)).build())
                .unwrap();
        assert!(json.contains(&format!("\"address\":\"{ADDR}\"")));
    }
}
