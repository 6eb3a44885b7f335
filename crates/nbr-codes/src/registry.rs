//! The code-table registry and its typed lookup errors.

use std::collections::BTreeMap;
use std::fmt;

use crate::builtin::{NBIS_STATE_CODES, OHIO_COUNTY_ABBREVS};

// ---------------------------------------------------------------------------
// Rows supplied by loaders / callers
// ---------------------------------------------------------------------------

/// One county row: 5-digit FIPS code and the county's published name
/// (e.g. `39049` -> "Franklin County").
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct CountyFipsRow {
    pub fips: u32,
    pub name: String,
}

/// One place-code row: FIPS place code, the county's 3-letter abbreviation,
/// and the township name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct PlaceRow {
    pub place_code: u32,
    pub county_abbrev: String,
    pub township: String,
}

// ---------------------------------------------------------------------------
// Lookup errors
// ---------------------------------------------------------------------------

/// A translation miss. Never coerced to a default by this crate.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum CodeLookupError {
    StateNotFound { code: String },
    CountyNotFound { fips: u32 },
    PlaceNotFound { code: String },
    AbbrevNotFound { county: String },
    /// The input could not even be parsed into a code (blank, non-numeric).
    InvalidCode { raw: String },
}

impl fmt::Display for CodeLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeLookupError::StateNotFound { code } => {
                write!(f, "no state entry for code '{code}'")
            }
            CodeLookupError::CountyNotFound { fips } => {
                write!(f, "no county entry for FIPS {fips}")
            }
            CodeLookupError::PlaceNotFound { code } => {
                write!(f, "no place entry for code '{code}'")
            }
            CodeLookupError::AbbrevNotFound { county } => {
                write!(f, "no abbreviation for county '{county}'")
            }
            CodeLookupError::InvalidCode { raw } => {
                write!(f, "'{raw}' is not a usable code value")
            }
        }
    }
}

impl std::error::Error for CodeLookupError {}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Immutable, pre-loaded lookup tables. Built once per process and shared
/// read-only across reconciliation runs.
#[derive(Debug, Clone)]
pub struct CodeTableRegistry {
    /// NBIS 3-digit code -> state name.
    state_names: BTreeMap<String, String>,
    /// 5-digit FIPS -> county name.
    county_names: BTreeMap<u32, String>,
    /// Place code -> (county abbreviation, township).
    places: BTreeMap<u32, PlaceRow>,
    /// Upper-cased county name -> 3-letter DOT abbreviation.
    county_abbrevs: BTreeMap<String, String>,
}

impl CodeTableRegistry {
    /// Build a registry from pre-loaded county and place rows. The NBIS state
    /// table and the county-abbreviation table are compiled in.
    pub fn new(county_rows: Vec<CountyFipsRow>, place_rows: Vec<PlaceRow>) -> Self {
        let state_names = NBIS_STATE_CODES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        let county_abbrevs = OHIO_COUNTY_ABBREVS
            .iter()
            .map(|(name, abbrev)| (name.to_string(), abbrev.to_string()))
            .collect();
        let county_names = county_rows.into_iter().map(|r| (r.fips, r.name)).collect();
        let places = place_rows.into_iter().map(|r| (r.place_code, r)).collect();

        Self {
            state_names,
            county_names,
            places,
            county_abbrevs,
        }
    }

    /// Registry with only the compiled-in tables (state codes, abbreviations).
    /// County/place lookups miss until rows are supplied via [`Self::new`].
    pub fn builtin() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Normalise a historic 2-digit state code to its NBIS 3-digit code.
    /// 3-digit inputs pass through when known.
    pub fn nbis_state_code(&self, code: &str) -> Result<&str, CodeLookupError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CodeLookupError::InvalidCode {
                raw: code.to_string(),
            });
        }

        if let Some((key, _)) = self.state_names.get_key_value(code) {
            return Ok(key.as_str());
        }

        // The 3-digit code embeds the 2-digit FIPS code as its first two digits.
        if code.len() == 2 {
            for key in self.state_names.keys() {
                if &key[..2] == code {
                    return Ok(key.as_str());
                }
            }
        }

        Err(CodeLookupError::StateNotFound {
            code: code.to_string(),
        })
    }

    /// State name for a 2- or 3-digit state code.
    pub fn state_name(&self, code: &str) -> Result<&str, CodeLookupError> {
        let key = self.nbis_state_code(code)?.to_string();
        self.state_names
            .get(&key)
            .map(String::as_str)
            .ok_or(CodeLookupError::StateNotFound { code: key })
    }

    /// County name for a numeric county code within a state. The 5-digit FIPS
    /// key is the 2-digit state code followed by the zero-padded county code.
    pub fn county_name(&self, county_code: &str, state_code: &str) -> Result<&str, CodeLookupError> {
        let county = parse_code(county_code)?;
        let state = parse_code(state_code)?;
        let fips = state * 1000 + county;

        self.county_names
            .get(&fips)
            .map(String::as_str)
            .ok_or(CodeLookupError::CountyNotFound { fips })
    }

    /// 3-letter DOT abbreviation for a numeric county code within a state:
    /// county name -> first word -> abbreviation table.
    pub fn county_abbrev_from_numeric(
        &self,
        county_code: &str,
        state_code: &str,
    ) -> Result<&str, CodeLookupError> {
        let name = self.county_name(county_code, state_code)?;
        let first_word = name.split_whitespace().next().unwrap_or("").to_uppercase();

        self.county_abbrevs
            .get(&first_word)
            .map(String::as_str)
            .ok_or(CodeLookupError::AbbrevNotFound { county: first_word })
    }

    /// `(county_abbrev, township_name)` for a FIPS place code.
    pub fn county_name_and_township(
        &self,
        place_code: &str,
    ) -> Result<(&str, &str), CodeLookupError> {
        let code = parse_code(place_code)?;
        self.places
            .get(&code)
            .map(|row| (row.county_abbrev.as_str(), row.township.as_str()))
            .ok_or(CodeLookupError::PlaceNotFound {
                code: place_code.trim().to_string(),
            })
    }
}

/// Parse a numeric code field, tolerating surrounding whitespace and a
/// float-formatted tail ("39.0") from numeric round-tripping.
fn parse_code(raw: &str) -> Result<u32, CodeLookupError> {
    let trimmed = raw.trim();
    let whole = trimmed.split_once('.').map(|(w, _)| w).unwrap_or(trimmed);

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodeLookupError::InvalidCode {
            raw: raw.to_string(),
        });
    }
    whole.parse().map_err(|_| CodeLookupError::InvalidCode {
        raw: raw.to_string(),
    })
}
