//! Constants Module - Single Source of Truth
//!
//! Every fixed value the service reports on the wire lives here: release tag,
//! policy strings, reason codes, scores, env var names, response headers.
//! No hardcoded wire values in other modules.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name.
pub const APP_NAME: &str = "SafeSend Risk";

/// Release tag reported verbatim in every response body. Clients pin on this
/// for compatibility checks, so it only moves with a coordinated release.
pub const VERSION: &str = "v1.5.9-plaintext";

/// Backend tag: plaintext env-supplied lists, as opposed to a future
/// enrichment backend.
pub const SOURCE_PLAINTEXT: &str = "plaintext:env";

// ============================================
// RISK POLICY
// ============================================

/// Score assigned when the address matches any configured denylist.
pub const SCORE_LISTED: u8 = 100;

/// Baseline score for an address on no list.
pub const SCORE_BASELINE: u8 = 35;

/// Reason code for a sanctions-list match.
pub const REASON_OFAC: &str = "OFAC";

/// Reason code for an internal bad-list match.
pub const REASON_BADLIST: &str = "BADLIST";

/// Risk factor text for a sanctions-list match.
pub const FACTOR_OFAC: &str = "OFAC/sanctions list match";

/// Risk factor text for an internal bad-list match.
pub const FACTOR_BADLIST: &str = "Internal bad list match";

/// Policy text when the verdict blocks.
pub const POLICY_BLOCK: &str = "XWallet policy: hard block on listed addresses";

/// Policy text when the verdict allows.
pub const POLICY_WARN: &str = "XWallet policy: warn and allow under threshold";

// ============================================
// ADDRESS FORMAT
// ============================================

/// Marker every normalized address starts with.
pub const ADDRESS_PREFIX: &str = "0x";

/// Hex digits after the prefix.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Network label used when the caller supplies neither `chain` nor `network`.
pub const DEFAULT_NETWORK: &str = "unknown";

// ============================================
// ENVIRONMENT VARIABLES
// ============================================

/// Primary sanctions list (delimited plaintext).
pub const ENV_OFAC_LIST: &str = "OFACLIST";

/// Secondary sanctions list, unioned with the primary.
pub const ENV_OFAC_SET: &str = "OFAC_SET";

/// Internal bad list.
pub const ENV_BAD_LIST: &str = "BADLIST";

/// ENS bad list. Parsed and size-reported; the evaluator does not consult it
/// yet.
pub const ENV_BAD_ENS: &str = "BAD_ENS";

/// Server bind host override.
pub const ENV_HOST: &str = "SAFESEND_HOST";

/// Server bind port override (platform `PORT` wins when both are set).
pub const ENV_PORT: &str = "SAFESEND_PORT";

/// Platform-assigned bind port, set by the usual container hosts.
pub const ENV_PLATFORM_PORT: &str = "PORT";

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

// ============================================
// RESPONSE HEADERS
// ============================================

/// `Access-Control-Allow-Origin` value.
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// `Access-Control-Allow-Methods` value.
pub const CORS_ALLOW_METHODS: &str = "GET,OPTIONS,HEAD";

/// `Access-Control-Allow-Headers` value.
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";

/// `Cache-Control` value. Verdicts must never be served stale.
pub const CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate, max-age=0";

/// `Pragma` value.
pub const PRAGMA: &str = "no-cache";

/// `Expires` value.
pub const EXPIRES: &str = "0";

/// `Content-Type` value, carried on every response including empty bodies.
pub const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================
// WIRE MESSAGES
// ============================================

/// Error body message for a missing or invalid `address` parameter.
pub const ERR_ADDRESS_REQUIRED: &str = "address required";

/// Error body message for disallowed HTTP methods.
pub const ERR_METHOD_NOT_ALLOWED: &str = "method not allowed";

/// Error body message for unmatched paths.
pub const ERR_NO_ENDPOINT: &str = "no such endpoint";

/// Note attached to `/sanity` responses.
pub const SANITY_NOTE: &str = "Lengths only for sanity.";

/// Note attached to `/analytics` stub responses.
pub const ANALYTICS_NOTE: &str = "analytics stub (no enrichment configured)";
