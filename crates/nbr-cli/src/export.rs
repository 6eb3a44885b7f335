//! Report export: CSV rows or a JSON envelope with run attribution.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use nbr_engine::{ReconciliationReport, ReportRow, Summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            other => bail!("unknown format '{other}', expected csv or json"),
        }
    }
}

/// Run attribution stamped onto JSON exports.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RunStamp {
    pub run_id: String,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfn: Option<String>,
}

impl RunStamp {
    pub fn new(sfn: Option<&str>) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            sfn: sfn.map(str::to_string),
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct Envelope<'a> {
    #[serde(flatten)]
    stamp: &'a RunStamp,
    summary: Summary,
    results: Vec<ReportRow>,
}

/// Serialise the report in the requested format.
pub fn render(report: &ReconciliationReport, format: Format, stamp: &RunStamp) -> Result<Vec<u8>> {
    match format {
        Format::Json => {
            let envelope = Envelope {
                stamp,
                summary: report.summary(),
                results: report.to_rows(),
            };
            let mut bytes = serde_json::to_vec_pretty(&envelope).context("serialise report")?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        Format::Csv => {
            let mut wtr = csv::Writer::from_writer(Vec::new());
            for row in report.to_rows() {
                wtr.serialize(row).context("serialise report row")?;
            }
            wtr.into_inner().map_err(|e| anyhow::anyhow!("flush csv: {e}"))
        }
    }
}

/// Write to `out`, or stdout when no path is given.
pub fn write(bytes: &[u8], out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => fs::write(path, bytes).with_context(|| format!("write '{}'", path.display())),
        None => std::io::stdout()
            .write_all(bytes)
            .context("write report to stdout"),
    }
}
