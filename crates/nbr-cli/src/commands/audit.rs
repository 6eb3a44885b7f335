//! `nbr audit` — reconcile one bridge and export the report.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::AuditConfig;
use crate::export::{render, write, Format, RunStamp};
use crate::input;

pub struct AuditArgs<'a> {
    pub historic: &'a Path,
    pub modern: &'a Path,
    pub sfn: Option<&'a str>,
    pub config: AuditConfig,
    pub county_fips: Option<&'a Path>,
    pub place_codes: Option<&'a Path>,
    pub out: Option<&'a Path>,
    pub format: Format,
}

/// Returns true when the report contains findings (FAIL or ERROR) — the
/// caller maps that to a non-zero exit code.
pub fn run(args: AuditArgs<'_>) -> Result<bool> {
    let tables = super::build_tables(&args.config, args.county_fips, args.place_codes)?;
    let registry = nbr_engine::standard_registry().context("build standard checklist")?;

    let historic = input::load_historic(args.historic, args.sfn)?;
    let modern = input::load_modern_json(args.modern)?;
    info!(
        historic_fields = historic.len(),
        modern_fields = modern.len(),
        "records loaded"
    );

    let report = nbr_engine::run(&historic, &modern, &registry, &tables)
        .context("reconciliation run")?;

    let stamp = RunStamp::new(args.sfn);
    let bytes = render(&report, args.format, &stamp)?;
    write(&bytes, args.out)?;

    if let Some(path) = args.out {
        println!("report_written={}", path.display());
    }
    super::print_summary(&format!("run_id={} checks={} ", stamp.run_id, report.len()), report.summary());

    Ok(report.has_findings())
}
