//! `license-normalizr` — resolve declared dependency licenses into SPDX identifiers.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Install logging on stderr (`RUST_LOG`, or `--verbose`).
//! 3. Load config and pick the license-source priority.
//! 4. Load the dependency metadata and normalize it against the SPDX catalog.
//! 5. Write the artifact details as JSON and print a summary line.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use license_normalizr::config::load_config;
use license_normalizr::input::load_metadata;
use license_normalizr::models::{ArtifactDetail, LicenseSource};
use license_normalizr::output::emit_details;
use license_normalizr::{normalize_license_info, SpdxCatalog};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    let overrides: Vec<LicenseSource> = cli.sources.iter().copied().map(Into::into).collect();
    let sources = config.effective_sources(&overrides);

    let metadata = load_metadata(&cli.input)?;
    info!(
        dependencies = metadata.len(),
        sources = ?sources,
        "normalizing license metadata"
    );

    let details = normalize_license_info(&metadata, &sources, &SpdxCatalog::new());

    emit_details(&details, cli.output.as_deref(), !cli.compact)?;

    if !cli.quiet {
        print_summary(&details);
    }

    Ok(())
}

fn print_summary(details: &[ArtifactDetail]) {
    let total = details.len();
    let with_unknown = details.iter().filter(|d| d.has_unknown_licenses()).count();
    let without_license = details
        .iter()
        .filter(|d| d.spdx_licenses.is_empty() && d.unknown_licenses.is_empty())
        .count();
    let resolved = total - with_unknown - without_license;

    eprintln!(
        "Total: {}  Resolved: {}  Unknown: {}  Undeclared: {}",
        total,
        resolved.to_string().green(),
        with_unknown.to_string().yellow(),
        without_license.to_string().dimmed(),
    );
}
