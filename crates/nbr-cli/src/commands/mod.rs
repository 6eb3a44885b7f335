//! Command handler modules for the `nbr` binary.
//!
//! Shared wiring used by multiple command paths lives here; command-specific
//! logic lives in the submodules.

pub mod audit;
pub mod batch;
pub mod checks;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nbr_codes::{load_county_fips_csv, load_place_codes_csv, CodeTableRegistry};
use tracing::info;

use crate::config::AuditConfig;

/// Build the code tables from CLI flags / config, falling back to the
/// compiled-in tables alone when no files are configured.
pub fn build_tables(
    config: &AuditConfig,
    county_flag: Option<&Path>,
    place_flag: Option<&Path>,
) -> Result<CodeTableRegistry> {
    let county_path: Option<PathBuf> = county_flag
        .map(Path::to_path_buf)
        .or_else(|| config.county_fips_csv.clone());
    let place_path: Option<PathBuf> = place_flag
        .map(Path::to_path_buf)
        .or_else(|| config.place_codes_csv.clone());

    let county_rows = match &county_path {
        Some(p) => load_county_fips_csv(p)
            .with_context(|| format!("load county table '{}'", p.display()))?,
        None => Vec::new(),
    };
    let place_rows = match &place_path {
        Some(p) => load_place_codes_csv(p)
            .with_context(|| format!("load place table '{}'", p.display()))?,
        None => Vec::new(),
    };

    info!(
        counties = county_rows.len(),
        places = place_rows.len(),
        "code tables loaded"
    );
    Ok(CodeTableRegistry::new(county_rows, place_rows))
}

/// One-line machine-greppable summary for the operator's shell.
pub fn print_summary(prefix: &str, summary: nbr_engine::Summary) {
    println!(
        "{prefix}pass={} fail={} not_applicable={} error={}",
        summary.pass, summary.fail, summary.not_applicable, summary.error
    );
}
