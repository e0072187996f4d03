//! SafeSend Risk API Server
//!
//! Stateless address screening over env-supplied plaintext denylists.
//!
//! Usage:
//!   cargo run --bin safesend_api
//!
//! Environment:
//!   OFACLIST / OFAC_SET - Sanctions list sources (delimited plaintext)
//!   BADLIST             - Internal bad list
//!   BAD_ENS             - ENS bad list (reserved)
//!   SAFESEND_HOST       - Server host (default: 0.0.0.0)
//!   PORT / SAFESEND_PORT - Server port (default: 8080)
//!   RUST_LOG            - Log filter (default: info)

use safesend_risk::api::handlers::AppState;
use safesend_risk::api::create_service;
use safesend_risk::models::config::{ListSources, ServerConfig};
use safesend_risk::utils::constants::{APP_NAME, VERSION};
use axum::{extract::Request, ServiceExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    print_banner();

    // Snapshot list configuration once. Entry counts are logged; list
    // contents never are.
    let sources = ListSources::from_env();
    let counts = sources.counts();
    info!(
        ofaclist = counts.ofac_primary,
        ofac_set = counts.ofac_secondary,
        badlist = counts.badlist,
        bad_ens = counts.bad_ens,
        "list sources configured (entry counts only)"
    );

    // Create app state and router
    let state = Arc::new(AppState::new(sources));
    let app = create_service(state);

    // Get server config from env
    // Container hosts set PORT; SAFESEND_PORT is the local-dev fallback
    let server = ServerConfig::from_env();
    let addr: SocketAddr = server.bind_addr().parse()?;

    info!("🚀 {} {} starting on http://{}", APP_NAME, VERSION, addr);
    info!("");
    info!("Endpoints:");
    info!("  GET  /           - Liveness and version");
    info!("  GET  /sanity     - Configured list sizes (counts only)");
    info!("  GET  /check      - Address risk evaluation");
    info!("  GET  /analytics  - Enrichment stub");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");
    info!("");

    // Start server with graceful shutdown
    let listener = TcpListener::bind(addr).await?;

    // Create shutdown signal handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    // The normalize-path wrapper sits outside the router, so the service is
    // converted to a make-service here rather than on `Router`.
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("");
    info!("{} shutdown complete", APP_NAME);

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    ╔══════════════════════════════════════════╗
    ║                                          ║
    ║        S A F E S E N D   R I S K         ║
    ║                                          ║
    ║      Stateless address screening         ║
    ║      over plaintext denylists            ║
    ║                                          ║
    ╚══════════════════════════════════════════╝
    "#
    );
}
