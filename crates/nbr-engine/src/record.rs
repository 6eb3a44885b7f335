//! The `Record` type: one bridge as seen by one schema.
//!
//! A record is an immutable mapping from field name to a scalar value. The
//! historic (legacy inventory) record and the modern (asset system) record
//! are both `Record`s; only their key sets differ. Construction validates
//! shape; a record is never mutated after it is built.

use std::collections::BTreeMap;
use std::fmt;

/// A scalar field value. `Null` means the schema carries the field but the
/// source had no value for it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Null,
}

impl FieldValue {
    /// Comparable text form. `Null` compares as the empty string; integral
    /// numbers drop their fractional tail so `5.0` and `"5"` agree.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Null => String::new(),
        }
    }
}

/// Structural problem with record input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The JSON source was not an object.
    NotAnObject,
    /// A field held a non-scalar value (array / nested object).
    UnsupportedValue { field: String },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NotAnObject => write!(f, "record source must be a JSON object"),
            RecordError::UnsupportedValue { field } => {
                write!(f, "field '{field}' holds a non-scalar value")
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Immutable field-name -> value mapping for one bridge in one schema.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Build from (name, value) pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: Into<String>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Build from (name, text) pairs — the common case for file loaders and
    /// tests.
    pub fn from_text_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::from_pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k, FieldValue::Text(v.to_string()))),
        )
    }

    /// Build from a JSON object. Scalars map directly; `null` stays `Null`;
    /// booleans become `"true"` / `"false"`; arrays and nested objects are
    /// rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, RecordError> {
        let obj = value.as_object().ok_or(RecordError::NotAnObject)?;

        let mut fields = BTreeMap::new();
        for (key, v) in obj {
            let fv = match v {
                serde_json::Value::Null => FieldValue::Null,
                serde_json::Value::Bool(b) => FieldValue::Text(b.to_string()),
                serde_json::Value::Number(n) => {
                    FieldValue::Number(n.as_f64().unwrap_or(f64::NAN))
                }
                serde_json::Value::String(s) => FieldValue::Text(s.clone()),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(RecordError::UnsupportedValue { field: key.clone() })
                }
            };
            fields.insert(key.clone(), fv);
        }

        Ok(Self { fields })
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in deterministic (sorted) order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
