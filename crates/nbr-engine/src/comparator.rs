//! The comparator evaluator.
//!
//! One function interprets every comparator description from the registry.
//! Nothing here panics or returns `Err`: every internal failure (unresolvable
//! field, unparseable number, translation miss) is folded into an outcome
//! with `Status::Error` and the cause in `detail`.

use nbr_codes::CodeTableRegistry;
use nbr_units::{convert, decode_latitude, decode_longitude, DecodedCoordinate, LinearUnit};

use crate::outcome::{CheckOutcome, ComparisonOutcome, Status, SubOutcome};
use crate::record::Record;
use crate::registry::{CodeTable, Comparator, Conversion, FieldRef, Hint, NumericParams, SubMode};

/// Evaluate one comparator description against the two records.
pub(crate) fn evaluate(
    cmp: &Comparator,
    historic: &Record,
    modern: &Record,
    tables: &CodeTableRegistry,
) -> CheckOutcome {
    match cmp {
        Comparator::Exact {
            historic: h,
            modern: m,
            hint,
        } => CheckOutcome::Single(eval_exact(historic, modern, h, m, *hint, tables)),
        Comparator::Numeric {
            historic: h,
            modern: m,
            params,
        } => CheckOutcome::Single(eval_numeric(historic, modern, h, m, params)),
        Comparator::CodeTranslate { table, modern: m } => {
            CheckOutcome::Single(eval_code_translate(historic, modern, table, m, tables))
        }
        Comparator::Composite { subs } => CheckOutcome::Composite(
            subs.iter()
                .map(|s| SubOutcome {
                    key: s.key.to_string(),
                    outcome: match &s.mode {
                        SubMode::Exact => {
                            eval_exact(historic, modern, &s.historic, &s.modern, None, tables)
                        }
                        SubMode::Numeric(p) => {
                            eval_numeric(historic, modern, &s.historic, &s.modern, p)
                        }
                    },
                })
                .collect(),
        ),
    }
}

// ---------------------------------------------------------------------------
// Resolution + normalisation
// ---------------------------------------------------------------------------

/// Resolve one side. `Ok(None)` means the schema has no counterpart;
/// `Err` carries a field-missing detail.
fn resolve(record: &Record, r: &FieldRef) -> Result<Option<String>, String> {
    match r {
        FieldRef::Field(name) => match record.get(name) {
            Some(v) => Ok(Some(v.as_text())),
            None => Err(format!("field missing: {name}")),
        },
        FieldRef::Unmapped => Ok(None),
        FieldRef::Const(s) => Ok(Some((*s).to_string())),
    }
}

/// Trim whitespace and strip one pair of surrounding quote characters. The
/// legacy flat file quotes text fields with `'`.
fn normalize(s: &str) -> String {
    let t = s.trim();
    let t = if t.len() >= 2 {
        let bytes = t.as_bytes();
        let (first, last) = (bytes[0], bytes[t.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            &t[1..t.len() - 1]
        } else {
            t
        }
    } else {
        t
    };
    t.trim().to_string()
}

/// Shared handling for sides with no schema counterpart. Returns `None` when
/// both sides resolved and comparison should proceed.
fn unpaired_outcome(h: &Option<String>, m: &Option<String>) -> Option<ComparisonOutcome> {
    match (h, m) {
        (None, None) => Some(ComparisonOutcome {
            status: Status::NotApplicable,
            historic_value: None,
            modern_value: None,
            detail: "not recorded in either schema".to_string(),
        }),
        (Some(h), None) => Some(ComparisonOutcome {
            status: Status::NotApplicable,
            historic_value: Some(h.clone()),
            modern_value: None,
            detail: "no modern counterpart mapped".to_string(),
        }),
        (None, Some(m)) => Some(ComparisonOutcome {
            status: Status::NotApplicable,
            historic_value: None,
            modern_value: Some(m.clone()),
            detail: "no historic counterpart recorded".to_string(),
        }),
        (Some(_), Some(_)) => None,
    }
}

fn fmt_num(v: f64) -> String {
    let rounded = (v * 1e6).round() / 1e6;
    format!("{rounded}")
}

// ---------------------------------------------------------------------------
// Exact
// ---------------------------------------------------------------------------

fn eval_exact(
    historic: &Record,
    modern: &Record,
    h_ref: &FieldRef,
    m_ref: &FieldRef,
    hint: Option<Hint>,
    tables: &CodeTableRegistry,
) -> ComparisonOutcome {
    let h = match resolve(historic, h_ref) {
        Ok(v) => v,
        Err(detail) => return ComparisonOutcome::error(detail),
    };
    let m = match resolve(modern, m_ref) {
        Ok(v) => v,
        Err(detail) => return ComparisonOutcome::error(detail),
    };

    if let Some(outcome) = unpaired_outcome(&h, &m) {
        return outcome;
    }
    let (h, m) = (h.unwrap_or_default(), m.unwrap_or_default());

    let nh = normalize(&h);
    let nm = normalize(&m);

    if nh.is_empty() && nm.is_empty() {
        return ComparisonOutcome {
            status: Status::NotApplicable,
            historic_value: Some(h),
            modern_value: Some(m),
            detail: "intentionally blank on both sides".to_string(),
        };
    }

    if nh == nm {
        ComparisonOutcome {
            status: Status::Pass,
            historic_value: Some(h),
            modern_value: Some(m),
            detail: "values match".to_string(),
        }
    } else {
        let mut detail = format!("'{nh}' differs from '{nm}'");
        if let Some(Hint::PlaceTownship) = hint {
            match tables.county_name_and_township(&nm) {
                Ok((county, township)) => {
                    detail.push_str(&format!("; place {nm}: county {county}, township {township}"));
                }
                Err(e) => detail.push_str(&format!("; place hint unavailable ({e})")),
            }
        }
        ComparisonOutcome {
            status: Status::Fail,
            historic_value: Some(h),
            modern_value: Some(m),
            detail,
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric tolerance
// ---------------------------------------------------------------------------

fn eval_numeric(
    historic: &Record,
    modern: &Record,
    h_ref: &FieldRef,
    m_ref: &FieldRef,
    params: &NumericParams,
) -> ComparisonOutcome {
    let h = match resolve(historic, h_ref) {
        Ok(v) => v,
        Err(detail) => return ComparisonOutcome::error(detail),
    };
    let m = match resolve(modern, m_ref) {
        Ok(v) => v,
        Err(detail) => return ComparisonOutcome::error(detail),
    };

    if let Some(outcome) = unpaired_outcome(&h, &m) {
        return outcome;
    }
    let (h, m) = (h.unwrap_or_default(), m.unwrap_or_default());

    let nh = normalize(&h);
    let nm = normalize(&m);

    if nh.is_empty() && nm.is_empty() {
        return ComparisonOutcome {
            status: Status::NotApplicable,
            historic_value: Some(h),
            modern_value: Some(m),
            detail: "intentionally blank on both sides".to_string(),
        };
    }

    // Historic side: unit conversion, or plain parse.
    let mut notes: Vec<String> = Vec::new();
    let h_value = match params.convert {
        Some(Conversion::LatitudeDms) => match decode_latitude(&nh) {
            Ok(d) => decoded_with_notes(d, &nh, &mut notes),
            Err(e) => return decode_error(h, m, e.to_string()),
        },
        Some(Conversion::LongitudeDms) => match decode_longitude(&nh) {
            Ok(d) => decoded_with_notes(d, &nh, &mut notes),
            Err(e) => return decode_error(h, m, e.to_string()),
        },
        Some(Conversion::MetersToFeet) => match parse_f64(&nh) {
            Ok(v) => {
                let ft = convert(v, LinearUnit::Meters, LinearUnit::Feet);
                notes.push(format!("{} m -> {} ft", fmt_num(v), fmt_num(ft)));
                ft
            }
            Err(detail) => return decode_error(h, m, format!("historic {detail}")),
        },
        Some(Conversion::KilometersToMiles) => match parse_f64(&nh) {
            Ok(v) => {
                let mi = convert(v, LinearUnit::Kilometers, LinearUnit::Miles);
                notes.push(format!("{} km -> {} mi", fmt_num(v), fmt_num(mi)));
                mi
            }
            Err(detail) => return decode_error(h, m, format!("historic {detail}")),
        },
        None => match parse_f64(&nh) {
            Ok(v) => v,
            Err(detail) => return decode_error(h, m, format!("historic {detail}")),
        },
    };

    let m_value = match parse_f64(&nm) {
        Ok(v) => v,
        Err(detail) => return decode_error(h, m, format!("modern {detail}")),
    };

    let delta = (h_value - m_value).abs();
    let within = if params.inclusive {
        delta <= params.tolerance
    } else {
        delta < params.tolerance
    };

    let mut detail = if within {
        format!("delta {} within tolerance {}", fmt_num(delta), fmt_num(params.tolerance))
    } else {
        format!("delta {} exceeds tolerance {}", fmt_num(delta), fmt_num(params.tolerance))
    };
    for note in &notes {
        detail.push_str("; ");
        detail.push_str(note);
    }

    ComparisonOutcome {
        status: if within { Status::Pass } else { Status::Fail },
        historic_value: Some(h),
        modern_value: Some(m),
        detail,
    }
}

fn decoded_with_notes(d: DecodedCoordinate, raw: &str, notes: &mut Vec<String>) -> f64 {
    notes.push(format!("{raw} -> {}", fmt_num(d.decimal_degrees)));
    for flag in &d.flags {
        notes.push(flag.to_string());
    }
    d.decimal_degrees
}

fn decode_error(h: String, m: String, detail: String) -> ComparisonOutcome {
    ComparisonOutcome {
        status: Status::Error,
        historic_value: Some(h),
        modern_value: Some(m),
        detail,
    }
}

fn parse_f64(s: &str) -> Result<f64, String> {
    if s.is_empty() {
        return Err("value is blank, cannot compare numerically".to_string());
    }
    s.parse::<f64>()
        .map_err(|_| format!("value '{s}' is not a number"))
}

// ---------------------------------------------------------------------------
// Code translation
// ---------------------------------------------------------------------------

fn eval_code_translate(
    historic: &Record,
    modern: &Record,
    table: &CodeTable,
    m_ref: &FieldRef,
    tables: &CodeTableRegistry,
) -> ComparisonOutcome {
    // Resolve translation inputs.
    let (raw_display, canonical) = match table {
        CodeTable::StateName { code } => {
            let code = match resolve(historic, code) {
                Ok(Some(v)) => v,
                Ok(None) => {
                    return ComparisonOutcome {
                        status: Status::NotApplicable,
                        historic_value: None,
                        modern_value: None,
                        detail: "no historic counterpart recorded".to_string(),
                    }
                }
                Err(detail) => return ComparisonOutcome::error(detail),
            };
            let code_n = normalize(&code);
            match tables.state_name(&code_n) {
                Ok(name) => (code, name.to_string()),
                Err(e) => {
                    return ComparisonOutcome {
                        status: Status::Error,
                        historic_value: Some(code),
                        modern_value: None,
                        detail: e.to_string(),
                    }
                }
            }
        }
        CodeTable::CountyAbbrev { county, state } => {
            let county_raw = match resolve(historic, county) {
                Ok(Some(v)) => v,
                Ok(None) => {
                    return ComparisonOutcome {
                        status: Status::NotApplicable,
                        historic_value: None,
                        modern_value: None,
                        detail: "no historic counterpart recorded".to_string(),
                    }
                }
                Err(detail) => return ComparisonOutcome::error(detail),
            };
            let state_raw = match resolve(historic, state) {
                Ok(Some(v)) => v,
                Ok(None) => {
                    return ComparisonOutcome {
                        status: Status::NotApplicable,
                        historic_value: Some(county_raw),
                        modern_value: None,
                        detail: "no historic counterpart recorded".to_string(),
                    }
                }
                Err(detail) => return ComparisonOutcome::error(detail),
            };
            let display = format!("{}/{}", normalize(&county_raw), normalize(&state_raw));
            match tables.county_abbrev_from_numeric(&normalize(&county_raw), &normalize(&state_raw))
            {
                Ok(abbrev) => (display, abbrev.to_string()),
                Err(e) => {
                    return ComparisonOutcome {
                        status: Status::Error,
                        historic_value: Some(display),
                        modern_value: None,
                        detail: e.to_string(),
                    }
                }
            }
        }
    };

    // Compare the canonical value with the modern side.
    let m = match resolve(modern, m_ref) {
        Ok(v) => v,
        Err(detail) => return ComparisonOutcome::error(detail),
    };
    let m = match m {
        Some(v) => v,
        None => {
            return ComparisonOutcome {
                status: Status::NotApplicable,
                historic_value: Some(raw_display),
                modern_value: None,
                detail: format!("translated to '{canonical}'; no modern counterpart mapped"),
            }
        }
    };

    let nm = normalize(&m);
    if normalize(&canonical) == nm {
        let detail = format!("translated '{raw_display}' -> '{canonical}'");
        ComparisonOutcome {
            status: Status::Pass,
            historic_value: Some(raw_display),
            modern_value: Some(m),
            detail,
        }
    } else {
        let detail = format!("translated '{raw_display}' -> '{canonical}', differs from '{nm}'");
        ComparisonOutcome {
            status: Status::Fail,
            historic_value: Some(raw_display),
            modern_value: Some(m),
            detail,
        }
    }
}
