#![recursion_limit = "256"]
mod common;

use nbr_engine::{run, standard_registry, CheckOutcome, Status};

#[test]
fn scenario_missing_latitude_field_reports_error_for_that_check_only() {
    let registry = standard_registry().unwrap();
    let tables = common::tables();

    // Rebuild the historic record without LAT_016.
    let full = common::historic_fixture();
    let historic = nbr_engine::Record::from_pairs(
        full.field_names()
            .filter(|n| *n != "LAT_016")
            .map(|n| (n.to_string(), full.get(n).cloned().unwrap())),
    );

    let report = run(&historic, &common::modern_fixture(), &registry, &tables).unwrap();

    // The check is present, errored, and cites the missing field by name.
    assert_eq!(report.len(), registry.len());
    let bl05 = report.get("BL05").unwrap();
    assert_eq!(bl05.outcome.status(), Status::Error);
    match &bl05.outcome {
        CheckOutcome::Single(o) => assert!(o.detail.contains("field missing: LAT_016")),
        _ => panic!("BL05 is a single comparison"),
    }

    // Its neighbour is untouched.
    assert_eq!(report.get("BL06").unwrap().outcome.status(), Status::Pass);
    assert_eq!(report.summary().error, 1);
}

#[test]
fn scenario_comparator_not_invoked_when_field_missing() {
    // A record whose LAT_016 would crash the decoder if it were consulted is
    // irrelevant here: the field is absent entirely, so the engine
    // short-circuits before decoding.
    let registry = standard_registry().unwrap();
    let tables = common::tables();

    let historic = nbr_engine::Record::from_text_pairs([("STRUCTURE_NUMBER_008", "1")]);
    let modern = nbr_engine::Record::from_text_pairs([("sfn", "1")]);
    let report = run(&historic, &modern, &registry, &tables).unwrap();

    let bl05 = report.get("BL05").unwrap();
    assert_eq!(bl05.outcome.status(), Status::Error);
    match &bl05.outcome {
        CheckOutcome::Single(o) => assert!(o.detail.starts_with("field missing:")),
        _ => panic!("BL05 is a single comparison"),
    }
}
