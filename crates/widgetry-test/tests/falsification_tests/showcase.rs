//! Falsification Tests: Category C - Demonstration Flow (F021-F030)
//!
//! Claim: the showcase renders Windows then Mac, button before window, and
//! nothing else.

use widgetry::{Showcase, ShowcaseConfig};
use widgetry_core::{FactoryError, Family};
use widgetry_platform::{FactoryRegistry, MacFactory};
use widgetry_test::{BrokenSink, CaptureSink};

const EXPECTED: [&str; 4] = [
    "painting a button in Windows style",
    "drawing a window in Windows style",
    "painting a button in Mac style",
    "drawing a window in Mac style",
];

/// F021: Default showcase emits exactly four lines in fixed order
///
/// # Falsification Attempt
/// Run the default flow into a capture sink and compare line by line.
#[test]
fn f021_default_showcase_four_lines() {
    let mut sink = CaptureSink::new();
    let report = Showcase::default().run(&mut sink).unwrap();

    assert_eq!(
        sink.lines(),
        EXPECTED,
        "F021 FALSIFIED: showcase output differs"
    );
    assert_eq!(report.lines, 4, "F021 FALSIFIED: report line count");
}

/// F022: Running the showcase twice gives the same output twice
#[test]
fn f022_showcase_repeatable() {
    let showcase = Showcase::default();
    let mut first = CaptureSink::new();
    let mut second = CaptureSink::new();

    showcase.run(&mut first).unwrap();
    showcase.run(&mut second).unwrap();

    assert_eq!(
        first.contents(),
        second.contents(),
        "F022 FALSIFIED: showcase kept state between runs"
    );
}

/// F023: Family order in the configuration is the output order
#[test]
fn f023_config_order_respected() {
    let showcase = Showcase::new(ShowcaseConfig::new([Family::Mac, Family::Windows])).unwrap();
    let mut sink = CaptureSink::new();
    let report = showcase.run(&mut sink).unwrap();

    assert_eq!(report.families, vec![Family::Mac, Family::Windows]);
    assert_eq!(sink.lines()[0], EXPECTED[2]);
    assert_eq!(sink.lines()[3], EXPECTED[1]);
}

/// F024: Verification does not change the output
#[test]
fn f024_verified_showcase_same_output() {
    let showcase = Showcase::new(ShowcaseConfig::default().with_verify(true)).unwrap();
    let mut sink = CaptureSink::new();
    showcase.run(&mut sink).unwrap();

    assert_eq!(sink.lines(), EXPECTED);
}

/// F025: A broken output surfaces as an I/O error
///
/// # Falsification Attempt
/// Run the showcase into a sink that rejects every write.
#[test]
fn f025_broken_output_reported() {
    let err = Showcase::default().run(&mut BrokenSink).unwrap_err();

    assert!(
        matches!(err, FactoryError::Io(_)),
        "F025 FALSIFIED: expected I/O error, got {err:?}"
    );
}

/// F026: An unregistered family stops the run before anything is written
#[test]
fn f026_unregistered_family_stops_run() {
    let mut registry = FactoryRegistry::new();
    registry.register(Family::Mac, || Box::new(MacFactory::new()));
    let showcase = Showcase::new(ShowcaseConfig::new([Family::Windows]))
        .unwrap()
        .with_registry(registry);

    let mut sink = CaptureSink::new();
    let err = showcase.run(&mut sink).unwrap_err();

    assert!(matches!(err, FactoryError::NotRegistered(Family::Windows)));
    assert!(sink.contents().is_empty());
}

/// F027: Invalid configurations never produce a showcase
#[test]
fn f027_invalid_config_rejected() {
    assert!(Showcase::new(ShowcaseConfig::new([])).is_err());
    assert!(Showcase::new(ShowcaseConfig::new([Family::Mac, Family::Mac])).is_err());
}
