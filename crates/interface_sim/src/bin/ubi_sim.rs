//! UBI Claim Registry - Simulation Binary
//!
//! Runs a scripted scenario against a fresh in-memory registry and prints
//! one report per step as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Run the reference scenario
//! cargo run --bin ubi-sim
//!
//! # Run a scenario file with a different starting block
//! UBI_START_BLOCK=5000 cargo run --bin ubi-sim -- scenario.json
//! ```
//!
//! # Environment Variables
//!
//! * `UBI_ADMIN` - Admin principal (default: STADMIN111)
//! * `UBI_TREASURY` - Treasury principal (default: STTREASURY1)
//! * `UBI_START_BLOCK` - Starting block height (default: 1000)
//! * `UBI_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `RUST_LOG` - Overrides `UBI_LOG_LEVEL` with full filter directives

use anyhow::Context;
use domain_ubi::ClaimRegistry;
use interface_sim::{Scenario, SimConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = SimConfig::from_env().context("failed to load UBI_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        admin = %config.admin,
        treasury = %config.treasury,
        start_block = config.start_block,
        "Starting UBI claim simulation"
    );

    let scenario = match std::env::args().nth(1) {
        Some(path) => Scenario::from_path(&path)
            .with_context(|| format!("failed to load scenario from {}", path))?,
        None => Scenario::reference(),
    };

    let mut registry = ClaimRegistry::new(&config.settings());
    let reports = scenario.run(&mut registry);

    println!("{}", serde_json::to_string_pretty(&reports)?);

    tracing::info!(
        steps = reports.len(),
        registered = registry.registered_count(),
        final_block = %registry.current_block(),
        "Simulation complete"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
