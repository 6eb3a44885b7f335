//! nbr-engine
//!
//! Legacy-inventory vs. state-asset-record reconciliation:
//! - `Record`: immutable field-name -> value view of one bridge in one schema
//! - comparator family: exact / numeric-tolerance / code-translate / composite
//! - `CheckRegistry`: the full transition checklist as one declarative table
//! - `run`: registry-ordered evaluation into a `ReconciliationReport`
//!
//! Architectural decisions:
//! - Checks are data rows interpreted by one evaluator, not hand-written
//!   methods; a check can never report under another check's id.
//! - "Could not determine" (ERROR) and "determined to differ" (FAIL) are
//!   distinct statuses and are never conflated.
//! - Tolerances compare magnitudes; a historic value far below modern fails
//!   exactly like one far above.
//! - Pure deterministic logic. No IO, no wall-clock; code tables are
//!   constructed by the caller and passed in.

mod catalog;
mod comparator;
mod engine;
mod outcome;
mod record;
mod registry;
mod report;

pub use catalog::standard_registry;
pub use engine::{run, run_batch, RunError};
pub use outcome::{CheckOutcome, ComparisonOutcome, Status, SubOutcome};
pub use record::{FieldValue, Record, RecordError};
pub use registry::{
    CheckDefinition, CheckRegistry, CodeTable, Comparator, Conversion, FieldRef, Hint,
    NumericParams, RegistryError, SubCheck, SubMode,
};
pub use report::{ComparisonResult, ReconciliationReport, ReportRow, Summary};
