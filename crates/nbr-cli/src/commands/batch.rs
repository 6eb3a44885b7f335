//! `nbr batch` — reconcile many bridges from a manifest.
//!
//! Manifest shape (JSON array):
//!
//! ```json
//! [
//!   {"sfn": "2701464", "historic": "recs/2701464_nbi.csv", "modern": "recs/2701464_tims.json"}
//! ]
//! ```
//!
//! Each entry produces one report file under `--out-dir` plus a summary line
//! on stdout. Pairs reconcile in parallel; output order follows the
//! manifest.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use nbr_engine::Record;
use serde::Deserialize;
use tracing::info;

use crate::config::AuditConfig;
use crate::export::{render, Format, RunStamp};
use crate::input;

#[derive(Debug, Deserialize)]
pub struct ManifestEntry {
    pub sfn: String,
    pub historic: PathBuf,
    pub modern: PathBuf,
}

pub struct BatchArgs<'a> {
    pub manifest: &'a Path,
    pub out_dir: &'a Path,
    pub config: AuditConfig,
    pub county_fips: Option<&'a Path>,
    pub place_codes: Option<&'a Path>,
    pub format: Format,
}

/// Returns true when any bridge's report contains findings.
pub fn run(args: BatchArgs<'_>) -> Result<bool> {
    let raw = fs::read_to_string(args.manifest)
        .with_context(|| format!("read manifest '{}'", args.manifest.display()))?;
    let entries: Vec<ManifestEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("parse manifest '{}'", args.manifest.display()))?;
    if entries.is_empty() {
        bail!("manifest lists no bridges");
    }

    let tables = super::build_tables(&args.config, args.county_fips, args.place_codes)?;
    let registry = nbr_engine::standard_registry().context("build standard checklist")?;

    let mut pairs: Vec<(Record, Record)> = Vec::with_capacity(entries.len());
    for e in &entries {
        let historic = input::load_historic(&e.historic, Some(&e.sfn))
            .with_context(|| format!("bridge {}", e.sfn))?;
        let modern = input::load_modern_json(&e.modern)
            .with_context(|| format!("bridge {}", e.sfn))?;
        pairs.push((historic, modern));
    }
    info!(bridges = pairs.len(), "manifest loaded");

    fs::create_dir_all(args.out_dir)
        .with_context(|| format!("create out dir '{}'", args.out_dir.display()))?;

    let reports = nbr_engine::run_batch(&pairs, &registry, &tables);

    let extension = match args.format {
        Format::Csv => "csv",
        Format::Json => "json",
    };

    let mut any_findings = false;
    for (entry, result) in entries.iter().zip(reports) {
        let report = result.with_context(|| format!("bridge {}", entry.sfn))?;
        let stamp = RunStamp::new(Some(&entry.sfn));
        let bytes = render(&report, args.format, &stamp)?;

        let path = args.out_dir.join(format!("{}.{extension}", entry.sfn));
        fs::write(&path, &bytes).with_context(|| format!("write '{}'", path.display()))?;

        any_findings |= report.has_findings();
        super::print_summary(&format!("sfn={} ", entry.sfn), report.summary());
    }

    Ok(any_findings)
}
