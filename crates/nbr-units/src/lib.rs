//! nbr-units
//!
//! Measurement-unit conversion for inventory reconciliation:
//! - linear units (meters/feet, kilometers/miles)
//! - packed degree-minute-second coordinate decoding from the legacy
//!   inventory encoding
//!
//! Pure deterministic logic. No IO, no wall-clock. Decode failures are typed
//! errors; the comparator layer downgrades them to ERROR outcomes.

mod geo;
mod linear;

pub use geo::{decode_latitude, decode_longitude, DecodedCoordinate, GeoDecodeError, GeoFlag};
pub use linear::{convert, LinearUnit};
