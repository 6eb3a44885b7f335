//! CSV loaders for the caller-supplied code tables.
//!
//! Tables load once at process start. Unlike per-record ingestion, a bad
//! table row is a configuration failure and fails the whole load with a typed
//! error — every later lookup would be suspect otherwise.
//!
//! ## Column contracts (case-insensitive, order-independent)
//!
//! County FIPS table:
//!
//! | Column | Example           |
//! |--------|-------------------|
//! | `fips` | `39049`           |
//! | `name` | `Franklin County` |
//!
//! Place-code table:
//!
//! | Column        | Example    |
//! |---------------|------------|
//! | `FIPS CODE`   | `18000`    |
//! | `COUNTY CODE` | `FRA`      |
//! | `TOWNSHIP`    | `Columbus` |

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::registry::{CountyFipsRow, PlaceRow};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Structural failure while loading a code table.
#[derive(Debug)]
pub enum TableLoadError {
    /// An I/O or CSV-library error.
    Io(String),
    /// The header row is missing a required column.
    MissingColumn(String),
    /// A field could not be parsed into the expected type.
    ParseField {
        row: usize,
        column: &'static str,
        raw: String,
    },
}

impl fmt::Display for TableLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableLoadError::Io(msg) => write!(f, "table io error: {msg}"),
            TableLoadError::MissingColumn(col) => {
                write!(f, "table missing required column: '{col}'")
            }
            TableLoadError::ParseField { row, column, raw } => {
                write!(f, "table row {row}: cannot parse '{column}' from value '{raw}'")
            }
        }
    }
}

impl std::error::Error for TableLoadError {}

// ---------------------------------------------------------------------------
// County FIPS table
// ---------------------------------------------------------------------------

/// Load the county FIPS table from a CSV file.
pub fn load_county_fips_csv(path: &Path) -> Result<Vec<CountyFipsRow>, TableLoadError> {
    let file = File::open(path)
        .map_err(|e| TableLoadError::Io(format!("open '{}': {e}", path.display())))?;
    load_county_fips_reader(file)
}

/// Load the county FIPS table from any reader (tests use in-memory CSV).
pub fn load_county_fips_reader<R: Read>(reader: R) -> Result<Vec<CountyFipsRow>, TableLoadError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| TableLoadError::Io(e.to_string()))?
        .clone();
    let fips_idx = column_index(&headers, "fips")?;
    let name_idx = column_index(&headers, "name")?;

    let mut out = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let row = i + 2; // 1-based, after the header
        let record = record.map_err(|e| TableLoadError::Io(e.to_string()))?;

        let fips_raw = record.get(fips_idx).unwrap_or("").trim();
        let fips: u32 = fips_raw.parse().map_err(|_| TableLoadError::ParseField {
            row,
            column: "fips",
            raw: fips_raw.to_string(),
        })?;

        let name = record.get(name_idx).unwrap_or("").trim().to_string();
        if name.is_empty() {
            return Err(TableLoadError::ParseField {
                row,
                column: "name",
                raw: String::new(),
            });
        }

        out.push(CountyFipsRow { fips, name });
    }

    Ok(out)
}

// ---------------------------------------------------------------------------
// Place-code table
// ---------------------------------------------------------------------------

/// Load the place-code table from a CSV file.
pub fn load_place_codes_csv(path: &Path) -> Result<Vec<PlaceRow>, TableLoadError> {
    let file = File::open(path)
        .map_err(|e| TableLoadError::Io(format!("open '{}': {e}", path.display())))?;
    load_place_codes_reader(file)
}

/// Load the place-code table from any reader.
pub fn load_place_codes_reader<R: Read>(reader: R) -> Result<Vec<PlaceRow>, TableLoadError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| TableLoadError::Io(e.to_string()))?
        .clone();
    let code_idx = column_index(&headers, "FIPS CODE")?;
    let county_idx = column_index(&headers, "COUNTY CODE")?;
    let township_idx = column_index(&headers, "TOWNSHIP")?;

    let mut out = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let row = i + 2;
        let record = record.map_err(|e| TableLoadError::Io(e.to_string()))?;

        let code_raw = record.get(code_idx).unwrap_or("").trim();
        let place_code: u32 = code_raw.parse().map_err(|_| TableLoadError::ParseField {
            row,
            column: "FIPS CODE",
            raw: code_raw.to_string(),
        })?;

        out.push(PlaceRow {
            place_code,
            county_abbrev: record.get(county_idx).unwrap_or("").trim().to_string(),
            township: record.get(township_idx).unwrap_or("").trim().to_string(),
        });
    }

    Ok(out)
}

/// Case-insensitive column lookup.
fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, TableLoadError> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| TableLoadError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const COUNTY_CSV: &str = "fips,name,state\n39041,Delaware County,OH\n39049,Franklin County,OH\n";
    const PLACE_CSV: &str = "FIPS CODE,COUNTY CODE,TOWNSHIP\n18000,FRA,Columbus\n21434,DEL,Delaware\n";

    // --- county table ---

    #[test]
    fn county_table_loads() {
        let rows = load_county_fips_reader(COUNTY_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fips, 39041);
        assert_eq!(rows[1].name, "Franklin County");
    }

    #[test]
    fn county_table_missing_header_rejected() {
        let err = load_county_fips_reader("fips,state\n39041,OH\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TableLoadError::MissingColumn(ref c) if c == "name"));
    }

    #[test]
    fn county_table_bad_fips_fails_load() {
        let err =
            load_county_fips_reader("fips,name\nXX,Franklin County\n".as_bytes()).unwrap_err();
        match err {
            TableLoadError::ParseField { row, column, raw } => {
                assert_eq!(row, 2);
                assert_eq!(column, "fips");
                assert_eq!(raw, "XX");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn county_table_headers_case_insensitive() {
        let rows = load_county_fips_reader("FIPS,Name\n39049,Franklin County\n".as_bytes()).unwrap();
        assert_eq!(rows[0].fips, 39049);
    }

    // --- place table ---

    #[test]
    fn place_table_loads() {
        let rows = load_place_codes_reader(PLACE_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].place_code, 18000);
        assert_eq!(rows[0].county_abbrev, "FRA");
        assert_eq!(rows[1].township, "Delaware");
    }

    #[test]
    fn place_table_missing_township_column_rejected() {
        let err =
            load_place_codes_reader("FIPS CODE,COUNTY CODE\n18000,FRA\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TableLoadError::MissingColumn(_)));
    }

    // --- file path ---

    #[test]
    fn county_table_loads_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(COUNTY_CSV.as_bytes()).unwrap();
        let rows = load_county_fips_csv(tmp.path()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_place_codes_csv(Path::new("/nonexistent/places.csv")).unwrap_err();
        assert!(matches!(err, TableLoadError::Io(_)));
    }
}
