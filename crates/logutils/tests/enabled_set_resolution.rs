//! Integration tests for `GL_DEBUG` parsing.
//!
//! These tests verify that every comma-separated token of the raw value is
//! enabled verbatim and that nothing else is, including names that look like
//! parents or near-misses of enabled categories.

use logutils::{DebugFunc, EnabledDebugs, keys};

// ============================================================================
// Token Membership
// ============================================================================

/// Verifies each token is enabled and no other registered name is.
#[test]
fn tokens_match_exactly_registered_names() {
    let samples = [
        "autogen_exclude",
        "autogen_exclude,goanalysis/analyze",
        "linters_output,runner",
        "goanalysis/analyze,goanalysis/facts",
        "exec,exec,loader",
        "nolint,,revive,",
    ];

    for raw in samples {
        let enabled = EnabledDebugs::parse(raw);
        let tokens: Vec<&str> = raw.split(',').collect();

        for name in keys::ALL {
            assert_eq!(
                enabled.is_enabled(name),
                tokens.contains(name),
                "{raw:?} / {name:?}"
            );
        }
    }
}

/// Verifies names outside the registry are accepted like any other.
#[test]
fn unregistered_names_are_accepted() {
    let enabled = EnabledDebugs::parse("my_plugin,Runner");
    assert!(enabled.is_enabled("my_plugin"));
    assert!(enabled.is_enabled("Runner"));
    assert!(!enabled.is_enabled(keys::RUNNER));
    assert!(!keys::is_registered("my_plugin"));
}

// ============================================================================
// Empty and Absent Values
// ============================================================================

/// Verifies an empty or absent value enables no registered name at all.
#[test]
fn empty_value_disables_everything() {
    for enabled in [EnabledDebugs::parse(""), EnabledDebugs::from_env_value(None)] {
        assert!(enabled.is_empty());
        for name in keys::ALL {
            assert!(!enabled.is_enabled(name), "{name:?}");
            assert_eq!(enabled.debug(name), DebugFunc::NOP);
        }
    }
}

/// Verifies a lone comma enables only the empty sentinel.
#[test]
fn lone_comma_enables_only_sentinel() {
    let enabled = EnabledDebugs::parse(",");
    assert_eq!(enabled.len(), 1);
    assert!(enabled.is_enabled(keys::EMPTY));
    assert!(!enabled.is_enabled(keys::RUNNER));
}

// ============================================================================
// Naming Hierarchy
// ============================================================================

/// Verifies enabling children does not enable the parent.
#[test]
fn children_do_not_enable_parent() {
    let enabled = EnabledDebugs::parse("goanalysis/analyze,goanalysis/facts");
    assert!(!enabled.is_enabled(keys::GO_ANALYSIS));
    assert!(enabled.is_enabled(keys::GO_ANALYSIS_ANALYZE));
    assert!(enabled.is_enabled(keys::GO_ANALYSIS_FACTS));
    assert!(!enabled.is_enabled(keys::GO_ANALYSIS_FACTS_EXPORT));
}

/// Verifies enabling a parent does not enable its children.
#[test]
fn parent_does_not_enable_children() {
    let enabled = EnabledDebugs::parse("goanalysis/facts");
    assert!(!enabled.is_enabled(keys::GO_ANALYSIS_FACTS_CACHE));
    assert!(!enabled.is_enabled(keys::GO_ANALYSIS_FACTS_EXPORT));
    assert!(!enabled.is_enabled(keys::GO_ANALYSIS_FACTS_INHERIT));
    assert!(!enabled.debug(keys::GO_ANALYSIS_FACTS_CACHE).is_active());
}

// ============================================================================
// Determinism
// ============================================================================

/// Verifies parsing the same value twice yields the same membership.
#[test]
fn repeated_parsing_is_identical() {
    let raw = "stopwatch,goanalysis/memory,,tab_printer";
    let first = EnabledDebugs::parse(raw);
    let second = EnabledDebugs::parse(raw);
    assert_eq!(first, second);

    let mut first_names: Vec<&str> = first.iter().collect();
    let mut second_names: Vec<&str> = second.iter().collect();
    first_names.sort_unstable();
    second_names.sort_unstable();
    assert_eq!(first_names, vec!["", "goanalysis/memory", "stopwatch", "tab_printer"]);
    assert_eq!(first_names, second_names);
}

/// Verifies token order does not matter.
#[test]
fn token_order_is_irrelevant() {
    assert_eq!(
        EnabledDebugs::parse("runner,exec,loader"),
        EnabledDebugs::parse("loader,runner,exec")
    );
}
