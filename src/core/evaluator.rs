//! Risk Evaluator
//!
//! Applies the list-membership policy to a normalized address. The first
//! match in priority order decides the verdict; match flags are still
//! reported for every list regardless of which branch fired.

use serde::Serialize;

use crate::core::address::NormalizedAddress;
use crate::core::denylist::ResolvedLists;
use crate::utils::constants::{
    FACTOR_BADLIST, FACTOR_OFAC, REASON_BADLIST, REASON_OFAC, SCORE_BASELINE, SCORE_LISTED,
};

/// Per-list hit flags, always fully populated so callers can tell a
/// sanctions block apart from an internal-list block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListMatches {
    pub ofac: bool,
    pub badlist: bool,
    pub bad_ens: bool,
}

/// The evaluator's output, prior to response shaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskVerdict {
    /// 0-100. Listed addresses score [`SCORE_LISTED`], everything else the
    /// baseline.
    pub score: u8,
    /// True iff the address hit a list under current policy.
    pub block: bool,
    /// Reason codes in priority order. Empty when nothing matched.
    pub reasons: Vec<&'static str>,
    /// Human-readable descriptions paired with `reasons`.
    pub risk_factors: Vec<&'static str>,
    pub matched_in: ListMatches,
}

/// Evaluate an address against the resolved lists.
///
/// Priority order, first match wins: sanctions union, then the internal bad
/// list, then the baseline verdict. Exact token equality only. The ENS flag
/// reads false unconditionally until ENS evaluation is wired up.
pub fn evaluate(address: &NormalizedAddress, lists: &ResolvedLists) -> RiskVerdict {
    let matched_in = ListMatches {
        ofac: lists.ofac.contains(address.as_str()),
        badlist: lists.badlist.contains(address.as_str()),
        bad_ens: false,
    };

    if matched_in.ofac {
        RiskVerdict {
            score: SCORE_LISTED,
            block: true,
            reasons: vec![REASON_OFAC],
            risk_factors: vec![FACTOR_OFAC],
            matched_in,
        }
    } else if matched_in.badlist {
        RiskVerdict {
            score: SCORE_LISTED,
            block: true,
            reasons: vec![REASON_BADLIST],
            risk_factors: vec![FACTOR_BADLIST],
            matched_in,
        }
    } else {
        RiskVerdict {
            score: SCORE_BASELINE,
            block: false,
            reasons: Vec::new(),
            risk_factors: Vec::new(),
            matched_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::address::normalize_address;
    use crate::core::denylist::Denylist;

    const SANCTIONED: &str = "0x1111111111111111111111111111111111111111";
    const BAD: &str = "0x2222222222222222222222222222222222222222";
    const CLEAN: &str = "0x3333333333333333333333333333333333333333";

    fn lists() -> ResolvedLists {
        // SANCTIONED sits on both lists to exercise priority.
        ResolvedLists {
            ofac: Denylist::parse(Some(SANCTIONED)),
            badlist: Denylist::parse(Some(&format!("{BAD},{SANCTIONED}"))),
            bad_ens: Denylist::default(),
        }
    }

    fn addr(raw: &str) -> NormalizedAddress {
        normalize_address(Some(raw)).unwrap()
    }

    #[test]
    fn test_sanctions_match_blocks_with_ofac_reason() {
        let verdict = evaluate(&addr(SANCTIONED), &lists());
        assert_eq!(verdict.score, SCORE_LISTED);
        assert!(verdict.block);
        assert_eq!(verdict.reasons, vec![REASON_OFAC]);
        assert_eq!(verdict.risk_factors, vec![FACTOR_OFAC]);
        assert!(verdict.matched_in.ofac);
    }

    #[test]
    fn test_sanctions_outranks_bad_list() {
        let verdict = evaluate(&addr(SANCTIONED), &lists());
        // Only the sanctions reason is reported, but both flags are.
        assert_eq!(verdict.reasons, vec![REASON_OFAC]);
        assert!(verdict.matched_in.ofac);
        assert!(verdict.matched_in.badlist);
    }

    #[test]
    fn test_bad_list_match_blocks_with_badlist_reason() {
        let verdict = evaluate(&addr(BAD), &lists());
        assert_eq!(verdict.score, SCORE_LISTED);
        assert!(verdict.block);
        assert_eq!(verdict.reasons, vec![REASON_BADLIST]);
        assert_eq!(verdict.risk_factors, vec![FACTOR_BADLIST]);
        assert!(!verdict.matched_in.ofac);
        assert!(verdict.matched_in.badlist);
    }

    #[test]
    fn test_unlisted_address_gets_baseline() {
        let verdict = evaluate(&addr(CLEAN), &lists());
        assert_eq!(verdict.score, SCORE_BASELINE);
        assert!(!verdict.block);
        assert!(verdict.reasons.is_empty());
        assert!(verdict.risk_factors.is_empty());
        assert_eq!(verdict.matched_in, ListMatches::default());
    }

    #[test]
    fn test_block_tracks_list_membership() {
        for raw in [SANCTIONED, BAD, CLEAN] {
            let verdict = evaluate(&addr(raw), &lists());
            assert_eq!(verdict.block, verdict.score == SCORE_LISTED);
            let listed = verdict.matched_in.ofac || verdict.matched_in.badlist;
            assert_eq!(verdict.reasons.is_empty(), !listed);
        }
    }

    #[test]
    fn test_ens_flag_never_set() {
        // Even a token sitting in the ENS list does not flip the flag yet.
        let lists = ResolvedLists {
            bad_ens: Denylist::parse(Some(CLEAN)),
            ..ResolvedLists::default()
        };
        let verdict = evaluate(&addr(CLEAN), &lists);
        assert!(!verdict.matched_in.bad_ens);
        assert!(!verdict.block);
    }
}
