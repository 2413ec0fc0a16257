//! Exécution complète du catalogue sur un sink mémoire.

use catalogue_axes::axes::diamond::{GREETER_MARKER, HOST_MARKER, WELCOMER_MARKER};
use catalogue_axes::axes::nullsafety::ABSENT;
use catalogue_axes::catalog::header;
use catalogue_axes::{Catalog, MemorySink};
use pretty_assertions::assert_eq;

fn full_run() -> Vec<String> {
    let mut sink = MemorySink::new();
    let count = Catalog::standard().run_all(&mut sink).unwrap();
    assert_eq!(count, 12);
    sink.into_lines()
}

fn position(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|l| l == needle)
        .unwrap_or_else(|| panic!("ligne absente : {}", needle))
}

// ── Ordre ────────────────────────────────────────────────────────

#[test]
fn headers_appear_in_order_one_to_twelve() {
    let lines = full_run();
    let catalog = Catalog::standard();
    let positions: Vec<usize> = catalog
        .axes()
        .iter()
        .map(|axis| position(&lines, &header(axis.as_ref())))
        .collect();

    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert_eq!(positions.len(), 12);
}

#[test]
fn run_is_deterministic() {
    assert_eq!(full_run(), full_run());
}

#[test]
fn footer_counts_axes() {
    let lines = full_run();
    assert!(lines.contains(&"Catalogue complet : 12 axes exécutés".to_string()));
}

// ── Propriétés observables ───────────────────────────────────────

#[test]
fn absent_message_appears_exactly_once() {
    let lines = full_run();
    assert_eq!(lines.iter().filter(|l| l.as_str() == ABSENT).count(), 1);
}

#[test]
fn diamond_markers_in_fixed_order() {
    let lines = full_run();
    let g = position(&lines, GREETER_MARKER);
    assert_eq!(lines[g + 1], WELCOMER_MARKER);
    assert_eq!(lines[g + 2], HOST_MARKER);
}

#[test]
fn computed_values_are_printed() {
    let lines = full_run();
    for expected in [
        "add(1, 2) = 3 [entier]",
        "add(1.5, 2.5) = 4.0 [flottant]",
        "eval(5) = 5",
        "eval((1 + (2 + 3))) = 6",
        "sum_as_f64([1, 2, 3]) = 6.0",
        "full_name = Ada Lovelace",
        "après set_last(\"King\") : Augusta King",
        "dyn Shape → abstrait : true",
    ] {
        assert!(lines.iter().any(|l| l == expected), "ligne manquante : {}", expected);
    }
}

#[test]
fn single_axis_matches_its_slice_of_the_full_run() {
    let lines = full_run();
    let catalog = Catalog::standard();

    let mut one = MemorySink::new();
    catalog.run_one(5, &mut one).unwrap();

    let start = position(&lines, &one.lines()[0]);
    assert_eq!(&lines[start..start + one.lines().len()], one.lines());
}
