//! Record loading for the operator binary.
//!
//! Historic records come from the legacy NBI flat file (one CSV row per
//! bridge, text fields quoted with `'`) or from a JSON object; modern records
//! come from a JSON object as exported by the asset-system fetch layer.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use nbr_engine::Record;

/// Structure-number column of the legacy flat file.
const SFN_COLUMN: &str = "STRUCTURE_NUMBER_008";

/// Load a modern record from a JSON object file.
pub fn load_modern_json(path: &Path) -> Result<Record> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read modern record '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("parse modern record '{}'", path.display()))?;
    Record::from_json(&value)
        .with_context(|| format!("modern record '{}' is not a flat object", path.display()))
}

/// Load a historic record. `.json` files are flat objects; anything else is
/// treated as a legacy flat-file CSV, selecting the row whose structure
/// number matches `sfn` (or the first row when no `sfn` is given).
pub fn load_historic(path: &Path, sfn: Option<&str>) -> Result<Record> {
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read historic record '{}'", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("parse historic record '{}'", path.display()))?;
        return Record::from_json(&value)
            .with_context(|| format!("historic record '{}' is not a flat object", path.display()));
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("read historic flat file '{}'", path.display()))?;
    historic_from_flat_file(&raw, sfn)
        .with_context(|| format!("historic flat file '{}'", path.display()))
}

/// Parse the legacy flat file and pick one row.
fn historic_from_flat_file(raw: &str, sfn: Option<&str>) -> Result<Record> {
    let mut rdr = csv::ReaderBuilder::new()
        .quote(b'\'')
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers = rdr.headers().context("read header row")?.clone();
    let sfn_idx = headers
        .iter()
        .position(|h| h.trim() == SFN_COLUMN)
        .with_context(|| format!("flat file is missing the {SFN_COLUMN} column"))?;

    for record in rdr.records() {
        let record = record.context("read data row")?;
        let row_sfn = record.get(sfn_idx).unwrap_or("").trim();
        let matches = match sfn {
            Some(wanted) => row_sfn == wanted.trim(),
            None => true,
        };
        if matches {
            return Ok(Record::from_pairs(headers.iter().zip(record.iter()).map(
                |(h, v)| {
                    (
                        h.trim().to_string(),
                        nbr_engine::FieldValue::Text(v.to_string()),
                    )
                },
            )));
        }
    }

    match sfn {
        Some(wanted) => bail!("no row with structure number '{wanted}'"),
        None => bail!("flat file has no data rows"),
    }
}
