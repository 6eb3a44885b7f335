//! Packed degree-minute-second coordinate decoding.
//!
//! The legacy inventory encodes latitude/longitude as one numeric field whose
//! *digits* carry the DMS parts: `DDMMSSss` — two degree digits, two minute
//! digits, and the remainder as seconds scaled by 100 (`1814` = 18.14″).
//! Decoding therefore slices the string form at fixed widths; doing
//! arithmetic on the raw number would scramble the parts.
//!
//! Longitude follows the western-hemisphere convention: the stored digits are
//! unsigned, the decoded decimal value is negative. Implausible inputs are
//! flagged on the decoded value, never silently altered.

use std::fmt;

/// Decode failure for a packed coordinate field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum GeoDecodeError {
    /// The field contains non-digit characters after normalisation.
    NonNumeric { raw: String },
    /// Too few digits to slice degrees + minutes + seconds.
    TooShort { raw: String, len: usize },
}

impl fmt::Display for GeoDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoDecodeError::NonNumeric { raw } => {
                write!(f, "coordinate '{raw}' is not a packed DMS number")
            }
            GeoDecodeError::TooShort { raw, len } => {
                write!(f, "coordinate '{raw}' has {len} digits, need at least 6 (DDMMSS)")
            }
        }
    }
}

impl std::error::Error for GeoDecodeError {}

/// Plausibility flags raised by decoding. Flags annotate the value; they do
/// not change it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum GeoFlag {
    /// Degree component outside the continental-US band for this axis.
    ImplausibleDegrees { degrees: u32 },
    /// Decoded value outside the valid range for this axis.
    OutOfRange { value: f64 },
}

impl fmt::Display for GeoFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoFlag::ImplausibleDegrees { degrees } => {
                write!(f, "implausible degree component {degrees}")
            }
            GeoFlag::OutOfRange { value } => write!(f, "value {value} outside valid range"),
        }
    }
}

/// A decoded coordinate: decimal degrees (rounded to 1e-6) plus any
/// plausibility flags.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DecodedCoordinate {
    pub decimal_degrees: f64,
    pub flags: Vec<GeoFlag>,
}

/// Continental-US latitude degree band.
const LAT_DEG_MIN: u32 = 16;
const LAT_DEG_MAX: u32 = 55;

/// Continental-US longitude degree band (absolute western degrees).
const LON_DEG_MIN: u32 = 65;
const LON_DEG_MAX: u32 = 125;

/// Decode a packed latitude field (`DDMMSSss`) to decimal degrees.
pub fn decode_latitude(raw: &str) -> Result<DecodedCoordinate, GeoDecodeError> {
    let (degrees, decimal) = decode_packed(raw)?;

    let mut flags = Vec::new();
    if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&degrees) {
        flags.push(GeoFlag::ImplausibleDegrees { degrees });
    }

    Ok(DecodedCoordinate {
        decimal_degrees: decimal,
        flags,
    })
}

/// Decode a packed longitude field (`DDMMSSss`) to decimal degrees.
///
/// The stored digits are unsigned western-hemisphere degrees; the decoded
/// value is negated so any continental-US point comes out negative.
pub fn decode_longitude(raw: &str) -> Result<DecodedCoordinate, GeoDecodeError> {
    let (degrees, unsigned) = decode_packed(raw)?;
    let decimal = round6(-unsigned);

    let mut flags = Vec::new();
    if !(LON_DEG_MIN..=LON_DEG_MAX).contains(&degrees) {
        flags.push(GeoFlag::ImplausibleDegrees { degrees });
    }
    if !(-180.0..=0.0).contains(&decimal) {
        flags.push(GeoFlag::OutOfRange { value: decimal });
    }

    Ok(DecodedCoordinate {
        decimal_degrees: decimal,
        flags,
    })
}

/// Shared slicing: returns (degree component, decimal degrees rounded to 1e-6).
fn decode_packed(raw: &str) -> Result<(u32, f64), GeoDecodeError> {
    let digits = normalize_digits(raw)?;

    if digits.len() < 6 {
        return Err(GeoDecodeError::TooShort {
            raw: raw.to_string(),
            len: digits.len(),
        });
    }

    // Widths are fixed by the legacy format: DD MM SSss.
    let non_numeric = || GeoDecodeError::NonNumeric {
        raw: raw.to_string(),
    };
    let degrees: u32 = digits[0..2].parse().map_err(|_| non_numeric())?;
    let minutes: u32 = digits[2..4].parse().map_err(|_| non_numeric())?;
    let centi_seconds: u64 = digits[4..].parse().map_err(|_| non_numeric())?;

    let decimal = f64::from(degrees)
        + f64::from(minutes) / 60.0
        + (centi_seconds as f64 / 100.0) / 3600.0;

    Ok((degrees, round6(decimal)))
}

/// Trim and reduce the raw field to its digit string. A fractional tail from
/// numeric round-tripping (`"39591814.0"`) is rounded away first, matching
/// how the legacy loaders materialise the field.
fn normalize_digits(raw: &str) -> Result<String, GeoDecodeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GeoDecodeError::NonNumeric {
            raw: raw.to_string(),
        });
    }

    let whole = match trimmed.split_once('.') {
        None => trimmed.to_string(),
        Some((_, _)) => {
            let value: f64 = trimmed.parse().map_err(|_| GeoDecodeError::NonNumeric {
                raw: raw.to_string(),
            })?;
            format!("{:.0}", value)
        }
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GeoDecodeError::NonNumeric {
            raw: raw.to_string(),
        });
    }

    Ok(whole)
}

fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- latitude ---

    #[test]
    fn latitude_packed_decode() {
        // 39°59'18.14" = 39 + 59/60 + 18.14/3600 = 39.988372...
        let d = decode_latitude("39591814").unwrap();
        assert_eq!(d.decimal_degrees, 39.988372);
        assert!(d.flags.is_empty());
    }

    #[test]
    fn latitude_six_digit_seconds_are_centiseconds() {
        // "395918" -> 39°59'0.18"
        let d = decode_latitude("395918").unwrap();
        assert_eq!(d.decimal_degrees, 39.983383);
    }

    #[test]
    fn latitude_fractional_tail_rounded_before_slicing() {
        let a = decode_latitude("39591814").unwrap();
        let b = decode_latitude("39591814.0").unwrap();
        assert_eq!(a.decimal_degrees, b.decimal_degrees);
    }

    #[test]
    fn latitude_implausible_degrees_flagged_not_altered() {
        let d = decode_latitude("71001000").unwrap();
        assert!(matches!(
            d.flags.as_slice(),
            [GeoFlag::ImplausibleDegrees { degrees: 71 }]
        ));
        assert!(d.decimal_degrees > 71.0);
    }

    #[test]
    fn latitude_non_numeric_is_typed_error() {
        let err = decode_latitude("39A91814").unwrap_err();
        assert!(matches!(err, GeoDecodeError::NonNumeric { .. }));
        assert!(err.to_string().contains("39A91814"));
    }

    #[test]
    fn latitude_too_short_is_typed_error() {
        let err = decode_latitude("3959").unwrap_err();
        assert!(matches!(err, GeoDecodeError::TooShort { len: 4, .. }));
    }

    #[test]
    fn latitude_blank_is_typed_error() {
        assert!(decode_latitude("   ").is_err());
    }

    // --- longitude ---

    #[test]
    fn longitude_decodes_negative() {
        // 83°00'18.00"W
        let d = decode_longitude("83001800").unwrap();
        assert_eq!(d.decimal_degrees, -83.005);
        assert!(d.flags.is_empty());
    }

    #[test]
    fn longitude_implausible_degrees_flagged() {
        let d = decode_longitude("30001800").unwrap();
        assert!(matches!(
            d.flags.as_slice(),
            [GeoFlag::ImplausibleDegrees { degrees: 30 }]
        ));
        // Value still decoded, still negative.
        assert!(d.decimal_degrees < 0.0);
    }

    #[test]
    fn longitude_garbled_input_rejected() {
        assert!(decode_longitude("west 83").is_err());
    }

    #[test]
    fn decode_is_deterministic() {
        let a = decode_longitude("83001800").unwrap();
        let b = decode_longitude("83001800").unwrap();
        assert_eq!(a, b);
    }
}
