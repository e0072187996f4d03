//! Address Screening Demo
//!
//! Drives the full library pipeline offline: parse list blobs, normalize
//! candidate addresses, evaluate, and shape the wire response.
//!
//! Run with: cargo run --example screening_demo

use safesend_risk::{
    evaluate, normalize_address, ListSources, RiskResponseBuilder, VERSION,
};

fn main() {
    println!(
        r#"
    ╔══════════════════════════════════════════════════════════════╗
    ║                                                              ║
    ║   🛡  SAFESEND RISK SCREENING DEMO                           ║
    ║   Plaintext denylist screening, no server required           ║
    ║                                                              ║
    ╚══════════════════════════════════════════════════════════════╝
    "#
    );

    // List blobs exactly as they would arrive through the environment:
    // newline/comma delimited, mixed case, stray whitespace.
    let sources = ListSources {
        ofac_primary: Some(
            "0x1111111111111111111111111111111111111111\n\
             0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
                .to_string(),
        ),
        ofac_secondary: Some("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb".to_string()),
        badlist: Some("0x2222222222222222222222222222222222222222, 0x1111111111111111111111111111111111111111".to_string()),
        bad_ens: None,
    };

    let lists = sources.resolve();
    let counts = sources.counts();

    println!("🔬 Screening Configuration ({VERSION}):");
    println!("   OFACLIST entries: {}", counts.ofac_primary);
    println!("   OFAC_SET entries: {}", counts.ofac_secondary);
    println!("   BADLIST entries:  {}", counts.badlist);
    println!();

    let candidates = [
        ("Sanctioned (both lists)", "0x1111111111111111111111111111111111111111"),
        ("Secondary sanctions source", "0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB"),
        ("Internal bad list only", "0x2222222222222222222222222222222222222222"),
        ("Clean", "0x3333333333333333333333333333333333333333"),
        ("Malformed input", "not-an-address"),
    ];

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📋 VERDICTS");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for (label, raw) in candidates {
        match normalize_address(Some(raw)) {
            Some(address) => {
                let verdict = evaluate(&address, &lists);
                let status = if verdict.block { "🚨 BLOCK" } else { "✅ ALLOW" };
                println!(
                    "   {label:<28} | {status} | score {:>3} | reasons {:?}",
                    verdict.score, verdict.reasons
                );
            }
            None => {
                println!("   {label:<28} | ❌ rejected by normalizer");
            }
        }
    }
    println!();

    // Full wire response for one blocked address
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📋 WIRE RESPONSE");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let address = normalize_address(Some("0x1111111111111111111111111111111111111111"))
        .expect("demo address is well formed");
    let verdict = evaluate(&address, &lists);
    let response = RiskResponseBuilder::new(address, "eth", verdict).build();

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("   ❌ serialization failed: {e}"),
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ DEMO COMPLETE");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
