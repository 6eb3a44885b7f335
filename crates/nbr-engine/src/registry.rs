//! Check definitions as data.
//!
//! Every check on the transition checklist is one `CheckDefinition` row:
//! an id, a human title, and a comparator description. One evaluator
//! (`crate::comparator`) interprets the rows, so a check's id, fields, and
//! semantics live in exactly one place.

use std::collections::BTreeSet;
use std::fmt;

/// Where a comparison side comes from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRef {
    /// Named field on the corresponding record.
    Field(&'static str),
    /// The schema has no counterpart for this side.
    Unmapped,
    /// A fixed configuration value (e.g. the operating state's name).
    Const(&'static str),
}

/// Unit conversion applied to the historic side before a numeric comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    MetersToFeet,
    KilometersToMiles,
    /// Packed DMS latitude digits -> decimal degrees.
    LatitudeDms,
    /// Packed DMS longitude digits -> negative decimal degrees.
    LongitudeDms,
}

/// Numeric comparison parameters. `inclusive` widens `delta < tolerance` to
/// `delta <= tolerance`; equality checks are tolerance 0, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct NumericParams {
    pub convert: Option<Conversion>,
    pub tolerance: f64,
    pub inclusive: bool,
}

impl NumericParams {
    /// Numeric equality ("3" == "3.0").
    pub fn equality() -> Self {
        Self {
            convert: None,
            tolerance: 0.0,
            inclusive: true,
        }
    }
}

/// Code-table translation applied to the historic side.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeTable {
    /// 2- or 3-digit state code -> state name.
    StateName { code: FieldRef },
    /// (numeric county code, state code) -> 3-letter county abbreviation.
    CountyAbbrev { county: FieldRef, state: FieldRef },
}

/// Sub-comparison mode inside a composite check.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubMode {
    Exact,
    Numeric(NumericParams),
}

/// One named (historic, modern) pair of a composite check.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SubCheck {
    pub key: &'static str,
    pub historic: FieldRef,
    pub modern: FieldRef,
    pub mode: SubMode,
}

/// Comparator description for one check.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// Normalised string equality. `hint` optionally names a translation
    /// appended to FAIL detail (never changes the status).
    Exact {
        historic: FieldRef,
        modern: FieldRef,
        hint: Option<Hint>,
    },
    /// Magnitude tolerance, optionally unit-converting the historic side.
    Numeric {
        historic: FieldRef,
        modern: FieldRef,
        params: NumericParams,
    },
    /// Translate the historic code(s) and compare the canonical value.
    CodeTranslate { table: CodeTable, modern: FieldRef },
    /// Independently-evaluated sub-pairs under one id.
    Composite { subs: Vec<SubCheck> },
}

/// Detail enrichment applied on FAIL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    /// Resolve the modern place code to (county abbreviation, township).
    PlaceTownship,
}

/// One row of the checklist.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CheckDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub comparator: Comparator,
}

impl CheckDefinition {
    /// Historic-side field names this check reads.
    pub fn historic_fields(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        collect_fields(&self.comparator, true, &mut out);
        out
    }

    /// Modern-side field names this check reads.
    pub fn modern_fields(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        collect_fields(&self.comparator, false, &mut out);
        out
    }

    /// Short kind label for listings/exports.
    pub fn kind(&self) -> &'static str {
        match &self.comparator {
            Comparator::Exact { .. } => "exact",
            Comparator::Numeric { .. } => "numeric",
            Comparator::CodeTranslate { .. } => "code-translate",
            Comparator::Composite { .. } => "composite",
        }
    }
}

fn push_field(r: &FieldRef, out: &mut Vec<&'static str>) {
    if let FieldRef::Field(name) = r {
        out.push(name);
    }
}

fn collect_fields(cmp: &Comparator, historic: bool, out: &mut Vec<&'static str>) {
    match cmp {
        Comparator::Exact {
            historic: h,
            modern: m,
            ..
        }
        | Comparator::Numeric {
            historic: h,
            modern: m,
            ..
        } => push_field(if historic { h } else { m }, out),
        Comparator::CodeTranslate { table, modern } => {
            if historic {
                match table {
                    CodeTable::StateName { code } => push_field(code, out),
                    CodeTable::CountyAbbrev { county, state } => {
                        push_field(county, out);
                        push_field(state, out);
                    }
                }
            } else {
                push_field(modern, out);
            }
        }
        Comparator::Composite { subs } => {
            for s in subs {
                push_field(if historic { &s.historic } else { &s.modern }, out);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Registry construction failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateId { id: String },
    DuplicateSubKey { id: String, key: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateId { id } => write!(f, "duplicate check id '{id}'"),
            RegistryError::DuplicateSubKey { id, key } => {
                write!(f, "check '{id}' declares sub-key '{key}' twice")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered, validated table of check definitions. The registry's order is
/// the canonical report order; ids are unique and stable across runs.
#[derive(Debug, Clone)]
pub struct CheckRegistry {
    defs: Vec<CheckDefinition>,
}

impl CheckRegistry {
    pub fn new(defs: Vec<CheckDefinition>) -> Result<Self, RegistryError> {
        let mut seen = BTreeSet::new();
        for def in &defs {
            if !seen.insert(def.id) {
                return Err(RegistryError::DuplicateId {
                    id: def.id.to_string(),
                });
            }
            if let Comparator::Composite { subs } = &def.comparator {
                let mut keys = BTreeSet::new();
                for s in subs {
                    if !keys.insert(s.key) {
                        return Err(RegistryError::DuplicateSubKey {
                            id: def.id.to_string(),
                            key: s.key.to_string(),
                        });
                    }
                }
            }
        }
        Ok(Self { defs })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckDefinition> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CheckDefinition> {
        self.defs.iter().find(|d| d.id == id)
    }
}
