//! Outcome model: statuses, single outcomes, composite roll-ups.

use std::fmt;

/// Status of one comparison.
///
/// `Fail` is reserved for "both values were resolvable and comparable, and
/// they disagree". Everything the engine could not determine (missing field,
/// decode failure, translation miss) is `Error`; checks with no counterpart
/// in one or both schemas are `NotApplicable`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pass,
    Fail,
    NotApplicable,
    Error,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::NotApplicable => "NOT_APPLICABLE",
            Status::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one comparator invocation. `historic_value` / `modern_value`
/// carry the raw (pre-normalisation) sides where they were resolvable, for
/// the audit trail; `detail` explains the status.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ComparisonOutcome {
    pub status: Status,
    pub historic_value: Option<String>,
    pub modern_value: Option<String>,
    pub detail: String,
}

impl ComparisonOutcome {
    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            historic_value: None,
            modern_value: None,
            detail: detail.into(),
        }
    }
}

/// One named sub-comparison of a composite check.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SubOutcome {
    pub key: String,
    pub outcome: ComparisonOutcome,
}

/// Outcome of a whole check: a single comparison, or named sub-comparisons
/// retained for audit detail.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    Single(ComparisonOutcome),
    Composite(Vec<SubOutcome>),
}

impl CheckOutcome {
    /// Roll-up status. For composites: FAIL if any sub-check failed, else
    /// ERROR if any errored, else PASS if any passed, else NOT_APPLICABLE.
    pub fn status(&self) -> Status {
        match self {
            CheckOutcome::Single(o) => o.status,
            CheckOutcome::Composite(subs) => {
                let mut any_error = false;
                let mut any_pass = false;
                for s in subs {
                    match s.outcome.status {
                        Status::Fail => return Status::Fail,
                        Status::Error => any_error = true,
                        Status::Pass => any_pass = true,
                        Status::NotApplicable => {}
                    }
                }
                if any_error {
                    Status::Error
                } else if any_pass {
                    Status::Pass
                } else {
                    Status::NotApplicable
                }
            }
        }
    }
}
