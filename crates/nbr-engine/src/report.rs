//! The reconciliation report: ordered results, summary counts, and the flat
//! tabular projection used for CSV/JSON export.

use crate::outcome::{CheckOutcome, Status};

/// One check's result: the id is the audit key, stable across runs.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ComparisonResult {
    pub check_id: String,
    pub title: String,
    pub outcome: CheckOutcome,
}

/// Roll-up counts over a report (composites count once, by roll-up status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct Summary {
    pub pass: usize,
    pub fail: usize,
    pub not_applicable: usize,
    pub error: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.pass + self.fail + self.not_applicable + self.error
    }
}

/// Read-only result of one reconciliation run. Iteration order is registry
/// order regardless of outcomes; length always equals registry length.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReconciliationReport {
    results: Vec<ComparisonResult>,
    summary: Summary,
}

impl ReconciliationReport {
    pub(crate) fn new(results: Vec<ComparisonResult>) -> Self {
        let mut summary = Summary::default();
        for r in &results {
            match r.outcome.status() {
                Status::Pass => summary.pass += 1,
                Status::Fail => summary.fail += 1,
                Status::NotApplicable => summary.not_applicable += 1,
                Status::Error => summary.error += 1,
            }
        }
        Self { results, summary }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComparisonResult> {
        self.results.iter()
    }

    pub fn results(&self) -> &[ComparisonResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// True when any check failed or errored — the condition a wrapping tool
    /// maps to a non-zero exit code.
    pub fn has_findings(&self) -> bool {
        self.summary.fail > 0 || self.summary.error > 0
    }

    /// Result for a specific check id.
    pub fn get(&self, check_id: &str) -> Option<&ComparisonResult> {
        self.results.iter().find(|r| r.check_id == check_id)
    }

    /// Flat tabular projection: one row per check id, in report order.
    /// Composite checks fold their sides into `key=value` lists and summarise
    /// non-passing sub-checks in `detail`.
    pub fn to_rows(&self) -> Vec<ReportRow> {
        self.results.iter().map(ReportRow::from_result).collect()
    }
}

/// One export row.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReportRow {
    pub check_id: String,
    pub title: String,
    pub status: Status,
    pub historic_value: String,
    pub modern_value: String,
    pub detail: String,
}

impl ReportRow {
    fn from_result(result: &ComparisonResult) -> Self {
        match &result.outcome {
            CheckOutcome::Single(o) => ReportRow {
                check_id: result.check_id.clone(),
                title: result.title.clone(),
                status: o.status,
                historic_value: o.historic_value.clone().unwrap_or_default(),
                modern_value: o.modern_value.clone().unwrap_or_default(),
                detail: o.detail.clone(),
            },
            CheckOutcome::Composite(subs) => {
                let historic_value = join_sides(subs, |o| o.historic_value.as_deref());
                let modern_value = join_sides(subs, |o| o.modern_value.as_deref());

                let problems: Vec<String> = subs
                    .iter()
                    .filter(|s| {
                        matches!(s.outcome.status, Status::Fail | Status::Error)
                    })
                    .map(|s| format!("{} {}: {}", s.key, s.outcome.status, s.outcome.detail))
                    .collect();
                let detail = if problems.is_empty() {
                    format!("{} sub-checks, none failing", subs.len())
                } else {
                    problems.join("; ")
                };

                ReportRow {
                    check_id: result.check_id.clone(),
                    title: result.title.clone(),
                    status: result.outcome.status(),
                    historic_value,
                    modern_value,
                    detail,
                }
            }
        }
    }
}

fn join_sides<F>(subs: &[crate::outcome::SubOutcome], pick: F) -> String
where
    F: Fn(&crate::outcome::ComparisonOutcome) -> Option<&str>,
{
    subs.iter()
        .filter_map(|s| pick(&s.outcome).map(|v| format!("{}={}", s.key, v)))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{ComparisonOutcome, SubOutcome};

    fn single(id: &str, status: Status) -> ComparisonResult {
        ComparisonResult {
            check_id: id.to_string(),
            title: id.to_string(),
            outcome: CheckOutcome::Single(ComparisonOutcome {
                status,
                historic_value: Some("h".to_string()),
                modern_value: Some("m".to_string()),
                detail: "d".to_string(),
            }),
        }
    }

    #[test]
    fn summary_counts_by_rollup_status() {
        let report = ReconciliationReport::new(vec![
            single("A", Status::Pass),
            single("B", Status::Fail),
            single("C", Status::NotApplicable),
            single("D", Status::Error),
            single("E", Status::Pass),
        ]);
        let s = report.summary();
        assert_eq!(s.pass, 2);
        assert_eq!(s.fail, 1);
        assert_eq!(s.not_applicable, 1);
        assert_eq!(s.error, 1);
        assert_eq!(s.total(), report.len());
        assert!(report.has_findings());
    }

    #[test]
    fn no_findings_when_only_pass_and_not_applicable() {
        let report =
            ReconciliationReport::new(vec![single("A", Status::Pass), single("B", Status::NotApplicable)]);
        assert!(!report.has_findings());
    }

    #[test]
    fn rows_follow_report_order() {
        let report = ReconciliationReport::new(vec![
            single("B2", Status::Pass),
            single("A1", Status::Fail),
        ]);
        let rows = report.to_rows();
        assert_eq!(rows[0].check_id, "B2");
        assert_eq!(rows[1].check_id, "A1");
    }

    #[test]
    fn composite_row_folds_sides_and_summarises_problems() {
        let result = ComparisonResult {
            check_id: "X".to_string(),
            title: "x".to_string(),
            outcome: CheckOutcome::Composite(vec![
                SubOutcome {
                    key: "left".to_string(),
                    outcome: ComparisonOutcome {
                        status: Status::Pass,
                        historic_value: Some("1".to_string()),
                        modern_value: Some("1".to_string()),
                        detail: "values match".to_string(),
                    },
                },
                SubOutcome {
                    key: "right".to_string(),
                    outcome: ComparisonOutcome {
                        status: Status::Fail,
                        historic_value: Some("2".to_string()),
                        modern_value: Some("3".to_string()),
                        detail: "'2' differs from '3'".to_string(),
                    },
                },
            ]),
        };
        let report = ReconciliationReport::new(vec![result]);
        let rows = report.to_rows();
        assert_eq!(rows[0].status, Status::Fail);
        assert_eq!(rows[0].historic_value, "left=1; right=2");
        assert_eq!(rows[0].modern_value, "left=1; right=3");
        assert!(rows[0].detail.contains("right FAIL"));
        assert!(!rows[0].detail.contains("left PASS"));
    }

    #[test]
    fn get_by_check_id() {
        let report = ReconciliationReport::new(vec![single("A", Status::Pass)]);
        assert!(report.get("A").is_some());
        assert!(report.get("Z").is_none());
    }
}
