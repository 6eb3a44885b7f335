//! nbr-codes
//!
//! Immutable code-translation tables for inventory reconciliation:
//! - NBIS 3-digit state codes -> state names (2-digit codes normalise first)
//! - county FIPS -> county name
//! - place codes -> (county abbreviation, township name)
//! - county name -> 3-letter DOT abbreviation
//!
//! The registry is built once, explicitly, from files or pre-built rows, and
//! passed into the engine. A lookup miss is a typed error; callers must not
//! coerce a miss into a default value — that distinction (could-not-translate
//! vs translated-but-different) is the point of this crate.

mod builtin;
mod load;
mod registry;

pub use load::{load_county_fips_csv, load_place_codes_csv, TableLoadError};
pub use registry::{CodeLookupError, CodeTableRegistry, CountyFipsRow, PlaceRow};
