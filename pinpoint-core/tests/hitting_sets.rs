#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use pinpoint_core::EnumerationOutcome;
use pinpoint_core::enumerate_minimal_hitting_sets;
use pinpoint_core::listener::RepairCollector;
use pinpoint_core::minimal_hitting_sets;
use pinpoint_core::termination::Indefinite;
use pinpoint_core::termination::InterruptFlag;

fn sorted(mut sets: Vec<Vec<&'static str>>) -> Vec<Vec<&'static str>> {
    for set in &mut sets {
        set.sort_unstable();
    }
    sets.sort();
    sets
}

#[test]
fn two_overlapping_sets() {
    let hitting_sets = minimal_hitting_sets([vec!["a", "b"], vec!["b", "c"]]);

    assert_eq!(sorted(hitting_sets), vec![vec!["a", "c"], vec!["b"]]);
}

#[test]
fn three_sets_in_a_row() {
    let hitting_sets = minimal_hitting_sets([vec!["a", "b"], vec!["b", "c"], vec!["c", "d"]]);

    assert_eq!(
        sorted(hitting_sets),
        vec![vec!["a", "c"], vec!["b", "c"], vec!["b", "d"]]
    );
}

#[test]
fn duplicate_elements_within_a_set_are_ignored() {
    let hitting_sets = minimal_hitting_sets([vec!["a", "a", "b"], vec!["b", "c"]]);

    assert_eq!(sorted(hitting_sets), vec![vec!["a", "c"], vec!["b"]]);
}

#[test]
fn a_common_element_is_the_only_smallest_hitting_set() {
    let hitting_sets =
        minimal_hitting_sets([vec!["x", "a"], vec!["x", "b"], vec!["x", "c"]]);

    assert_eq!(hitting_sets[0], vec!["x"]);
    assert_eq!(
        sorted(hitting_sets),
        vec![vec!["a", "b", "c"], vec!["x"]]
    );
}

#[test]
fn the_streaming_variant_reports_through_the_repair_callbacks() {
    let mut collector = RepairCollector::default();
    let outcome = enumerate_minimal_hitting_sets(
        [vec!["a", "b"], vec!["b", "c"]],
        &mut collector,
        &mut Indefinite,
    );

    assert_eq!(outcome, EnumerationOutcome::Completed);
    assert!(collector.is_complete());
    assert_eq!(
        sorted(collector.into_repairs()),
        vec![vec!["a", "c"], vec!["b"]]
    );
}

#[test]
fn an_interrupted_enumeration_reports_nothing() {
    let flag = InterruptFlag::new();
    flag.interrupt();

    let mut collector = RepairCollector::default();
    let outcome = enumerate_minimal_hitting_sets(
        [vec!["a", "b"], vec!["b", "c"]],
        &mut collector,
        &mut flag.clone(),
    );

    assert_eq!(outcome, EnumerationOutcome::Interrupted);
    assert!(collector.repairs().is_empty());
    assert!(collector.is_complete());
}
