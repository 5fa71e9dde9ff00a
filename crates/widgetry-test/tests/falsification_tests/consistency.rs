//! Falsification Tests: Category A - Family Consistency (F001-F010)
//!
//! Claim: a factory only ever hands out products of its own family.

use proptest::prelude::*;

use widgetry_core::{
    Button, FactoryError, Family, GuiFactory, Product, ProductKind, Window, verify_consistency,
};
use widgetry_platform::{MacFactory, WindowsFactory, select_factory};
use widgetry_test::{FactoryHarness, MockFactory, foreign_family};

/// F001: Windows factory products all belong to Windows
///
/// # Falsification Attempt
/// Create both products, compare their family with the factory's.
#[test]
fn f001_windows_factory_family_consistent() {
    let factory = WindowsFactory::new();
    let kit = factory.create_kit();

    assert_eq!(
        kit.button.family(),
        Family::Windows,
        "F001 FALSIFIED: Windows factory produced a foreign button"
    );
    assert_eq!(
        kit.window.family(),
        Family::Windows,
        "F001 FALSIFIED: Windows factory produced a foreign window"
    );
}

/// F002: Mac factory products all belong to Mac
#[test]
fn f002_mac_factory_family_consistent() {
    let factory = MacFactory::new();
    let kit = factory.create_kit();

    assert_eq!(
        kit.button.family(),
        Family::Mac,
        "F002 FALSIFIED: Mac factory produced a foreign button"
    );
    assert_eq!(
        kit.window.family(),
        Family::Mac,
        "F002 FALSIFIED: Mac factory produced a foreign window"
    );
}

/// F003: Output of a family never names another family
///
/// # Falsification Attempt
/// Render every built-in factory and scan the lines for other family names.
#[test]
fn f003_output_names_only_own_family() {
    let harness = FactoryHarness::new();

    for family in Family::ALL {
        let lines = harness.render(select_factory(family).as_ref()).unwrap();
        assert!(
            lines.iter().all(|l| l.contains(family.name())),
            "F003 FALSIFIED: {family} output missing family name: {lines:?}"
        );
        assert_eq!(
            foreign_family(&lines, family),
            None,
            "F003 FALSIFIED: {family} output names another family"
        );
    }
}

/// F004: Every built-in factory passes the consistency check
#[test]
fn f004_builtin_factories_verify() {
    for family in Family::ALL {
        let result = verify_consistency(select_factory(family).as_ref());
        assert!(
            result.is_ok(),
            "F004 FALSIFIED: {family} factory failed verification: {:?}",
            result.err()
        );
    }
}

/// F005: A leaky factory does not slip past the consistency check
///
/// # Falsification Attempt
/// Build a Windows factory that hands out Mac windows, expect rejection.
#[test]
fn f005_leaky_factory_detected() {
    let leaky = MockFactory::new(Family::Windows).with_window_family(Family::Mac);

    let err = verify_consistency(&leaky).err();
    assert!(
        matches!(
            err,
            Some(FactoryError::FamilyMismatch {
                kind: ProductKind::Window,
                expected: Family::Windows,
                found: Family::Mac,
            })
        ),
        "F005 FALSIFIED: leak not reported as family mismatch: {err:?}"
    );
}

/// F006: Repeated creation stays in family
///
/// # Falsification Attempt
/// Ask one factory for many products; none may drift.
#[test]
fn f006_repeated_creation_stays_in_family() {
    let factory = MacFactory::new();

    for _ in 0..100 {
        assert_eq!(factory.create_button().family(), Family::Mac);
        assert_eq!(factory.create_window().family(), Family::Mac);
    }
}

fn any_family() -> impl Strategy<Value = Family> {
    prop::sample::select(Family::ALL.to_vec())
}

proptest! {
    /// F007: For all families, selection yields a consistent factory
    #[test]
    fn f007_selected_factory_consistent(family in any_family()) {
        let factory = select_factory(family);
        prop_assert_eq!(factory.family(), family);
        prop_assert_eq!(factory.create_button().family(), family);
        prop_assert_eq!(factory.create_window().family(), family);
    }

    /// F008: For all leak configurations, verification rejects the leak
    #[test]
    fn f008_any_leak_rejected(
        family in any_family(),
        button_family in any_family(),
        window_family in any_family(),
    ) {
        let factory = MockFactory::new(family)
            .with_button_family(button_family)
            .with_window_family(window_family);
        let consistent = button_family == family && window_family == family;

        let result = verify_consistency(&factory);
        prop_assert_eq!(result.is_ok(), consistent);
    }
}
