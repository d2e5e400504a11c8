//! Ranks OApp security configurations by how much traffic each
//! application has received, then prints a sample.
//!
//! One GraphQL request fetches `OAppStats` (sorted by packet count) and
//! `OAppSecurityConfig`; configs are ordered by their app's stats rank,
//! duplicates collapsed, and the head of the list printed.

mod cli;
mod errors;
mod ordering;
mod pipeline;
mod rank_index;
mod report;

use crate::cli::Args;
use crate::errors::RankingError;
use clap::Parser;
use oapp_api::HttpTransport;
use tokio::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Start the tracing/logging system. Logs go to stderr; stdout carries
/// the report.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RankingError> {
    let now = Instant::now();
    let args = Args::parse();
    init_tracing();
    info!("OApp Ranking Report");

    // Load the configuration
    let mut config = oapp_config::load_config(args.config.as_deref()).map_err(|e| {
        error!("Unable to load configuration");
        error!("{e}");
        RankingError::CannotLoadConfig
    })?;
    args.apply(&mut config);
    config.validate().map_err(|e| {
        error!("{e}");
        RankingError::InvalidConfig
    })?;

    let transport = HttpTransport::new(&config).map_err(pipeline::map_api_error)?;
    info!("Querying {}", transport.url());

    let mut stdout = std::io::stdout().lock();
    let summary = pipeline::run(&config, &transport, &mut stdout).await?;

    // Print timings
    let elapsed = now.elapsed();
    info!(
        "Report completed in {:.3} seconds: {} stats, {} configs, {} unique ({} unranked), {} printed",
        elapsed.as_secs_f32(),
        summary.stats,
        summary.configs,
        summary.unique,
        summary.unknown,
        summary.printed
    );

    Ok(())
}
