//! YAML configuration for the operator binary: code-table locations and
//! export defaults. CLI flags override config values; built-in tables cover
//! the state-code and county-abbreviation lookups either way.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// CSV with `fips,name` columns for county lookups.
    pub county_fips_csv: Option<PathBuf>,
    /// CSV with `FIPS CODE,COUNTY CODE,TOWNSHIP` columns for place lookups.
    pub place_codes_csv: Option<PathBuf>,
    /// Default export format when `--format` is not given (`csv` | `json`).
    pub format: Option<String>,
}

impl AuditConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("parse config '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_partial_config() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "county_fips_csv: tables/fips.csv").unwrap();
        let cfg = AuditConfig::load(tmp.path()).unwrap();
        assert_eq!(cfg.county_fips_csv, Some(PathBuf::from("tables/fips.csv")));
        assert!(cfg.place_codes_csv.is_none());
        assert!(cfg.format.is_none());
    }

    #[test]
    fn unknown_keys_rejected() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "county_fips: typo.csv").unwrap();
        assert!(AuditConfig::load(tmp.path()).is_err());
    }
}
