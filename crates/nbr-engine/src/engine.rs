//! The reconciliation engine: one pass over the registry per record pair.

use std::fmt;
use std::num::NonZeroUsize;

use nbr_codes::CodeTableRegistry;

use crate::comparator;
use crate::outcome::{CheckOutcome, ComparisonOutcome};
use crate::record::Record;
use crate::registry::CheckRegistry;
use crate::report::{ComparisonResult, ReconciliationReport};

/// Fatal input problem. Per-check problems never surface here — they become
/// ERROR outcomes inside the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// A record carried no fields at all.
    EmptyRecord { side: &'static str },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::EmptyRecord { side } => write!(f, "{side} record is empty"),
        }
    }
}

impl std::error::Error for RunError {}

/// Run every registered check against one (historic, modern) pair.
///
/// Deterministic: registry order is report order, and a registry of N checks
/// always yields exactly N results. A check whose configured field is absent
/// from either record short-circuits to ERROR without invoking its
/// comparator.
pub fn run(
    historic: &Record,
    modern: &Record,
    registry: &CheckRegistry,
    tables: &CodeTableRegistry,
) -> Result<ReconciliationReport, RunError> {
    if historic.is_empty() {
        return Err(RunError::EmptyRecord { side: "historic" });
    }
    if modern.is_empty() {
        return Err(RunError::EmptyRecord { side: "modern" });
    }

    let mut results = Vec::with_capacity(registry.len());
    for def in registry.iter() {
        let outcome = match missing_field(def, historic, modern) {
            Some(name) => CheckOutcome::Single(ComparisonOutcome::error(format!(
                "field missing: {name}"
            ))),
            None => comparator::evaluate(&def.comparator, historic, modern, tables),
        };
        results.push(ComparisonResult {
            check_id: def.id.to_string(),
            title: def.title.to_string(),
            outcome,
        });
    }

    Ok(ReconciliationReport::new(results))
}

/// First configured field name absent from its record, if any.
fn missing_field(
    def: &crate::registry::CheckDefinition,
    historic: &Record,
    modern: &Record,
) -> Option<&'static str> {
    def.historic_fields()
        .into_iter()
        .find(|name| !historic.contains(name))
        .or_else(|| {
            def.modern_fields()
                .into_iter()
                .find(|name| !modern.contains(name))
        })
}

/// Run many independent record pairs with a stateless worker pool.
///
/// The registry and code tables are read-only, so pairs reconcile in
/// parallel without locking. Output order matches input order; each pair
/// yields exactly what the serial [`run`] would have produced for it.
pub fn run_batch(
    pairs: &[(Record, Record)],
    registry: &CheckRegistry,
    tables: &CodeTableRegistry,
) -> Vec<Result<ReconciliationReport, RunError>> {
    if pairs.is_empty() {
        return Vec::new();
    }

    let workers = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .min(pairs.len());

    if workers <= 1 {
        return pairs
            .iter()
            .map(|(h, m)| run(h, m, registry, tables))
            .collect();
    }

    let chunk_size = pairs.len().div_ceil(workers);
    let mut results: Vec<Option<Result<ReconciliationReport, RunError>>> =
        (0..pairs.len()).map(|_| None).collect();

    std::thread::scope(|scope| {
        let mut remaining = results.as_mut_slice();
        for chunk in pairs.chunks(chunk_size) {
            let (slot, rest) = std::mem::take(&mut remaining).split_at_mut(chunk.len());
            remaining = rest;
            scope.spawn(move || {
                for ((h, m), out) in chunk.iter().zip(slot.iter_mut()) {
                    *out = Some(run(h, m, registry, tables));
                }
            });
        }
    });

    results
        .into_iter()
        .map(|r| r.unwrap_or(Err(RunError::EmptyRecord { side: "historic" })))
        .collect()
}
