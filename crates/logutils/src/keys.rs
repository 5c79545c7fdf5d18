//! crates/logutils/src/keys.rs
//! Registered debug category names.
//!
//! Each constant names one instrumented subsystem. The list is advisory:
//! [`EnabledDebugs`](crate::EnabledDebugs) accepts any string, so a name that
//! is missing here still works when it appears in `GL_DEBUG`. Names containing
//! `/` are grouped by convention only; enabling a parent never enables its
//! children.

/// Debugs a filter excluding autogenerated source code.
pub const AUTOGEN_EXCLUDE: &str = "autogen_exclude";
/// Cache salt derived from the running binary.
pub const BIN_SALT: &str = "bin_salt";
/// Configuration file discovery and decoding.
pub const CONFIG_READER: &str = "config_reader";
/// Sentinel that never matches real code.
pub const EMPTY: &str = "";
/// Resolution of the enabled linter set.
pub const ENABLED_LINTERS: &str = "enabled_linters";
/// Debugs the `go env` command.
pub const ENV: &str = "env";
/// Issue exclusion rules.
pub const EXCLUDE_RULES: &str = "exclude_rules";
/// External command execution.
pub const EXEC: &str = "exec";
/// Mapping of generated file names back to their sources.
pub const FILENAME_UNADJUSTER: &str = "filename_unadjuster";
/// The `forbidigo` linter.
pub const FORBIDIGO: &str = "forbidigo";
/// Toolchain environment probing.
pub const GO_ENV: &str = "goenv";
/// Generic linter wrapper.
pub const LINTER: &str = "linter";
/// Shared state handed to linters.
pub const LINTERS_CONTEXT: &str = "linters_context";
/// Linter database.
pub const LINTERS_DB: &str = "lintersdb";
/// Raw linter output, which is otherwise discarded.
pub const LINTERS_OUTPUT: &str = "linters_output";
/// Package loading, including the loader's own debugging.
pub const LOADER: &str = "loader";
/// Per-linter issue cap.
pub const MAX_FROM_LINTER: &str = "max_from_linter";
/// Identical issue cap.
pub const MAX_SAME_ISSUES: &str = "max_same_issues";
/// Package cache.
pub const PKG_CACHE: &str = "pkgcache";
/// Top-level runner.
pub const RUNNER: &str = "runner";
/// Issue severity rules.
pub const SEVERITY_RULES: &str = "severity_rules";
/// Directory skipping.
pub const SKIP_DIRS: &str = "skip_dirs";
/// Source line extraction for reports.
pub const SOURCE_CODE: &str = "source_code";
/// Stage timing.
pub const STOPWATCH: &str = "stopwatch";
/// Tabular report printer.
pub const TAB_PRINTER: &str = "tab_printer";
/// Test harness.
pub const TEST: &str = "test";
/// Plain-text report printer.
pub const TEXT_PRINTER: &str = "text_printer";

/// Analysis framework; parent of the `goanalysis/...` names.
pub const GO_ANALYSIS: &str = "goanalysis";
/// Per-package analysis runs.
pub const GO_ANALYSIS_ANALYZE: &str = "goanalysis/analyze";
/// Cached analysis issues.
pub const GO_ANALYSIS_ISSUES_CACHE: &str = "goanalysis/issues/cache";
/// Memory usage during analysis.
pub const GO_ANALYSIS_MEMORY: &str = "goanalysis/memory";

/// Analysis facts; parent of the `goanalysis/facts/...` names.
pub const GO_ANALYSIS_FACTS: &str = "goanalysis/facts";
/// Fact cache.
pub const GO_ANALYSIS_FACTS_CACHE: &str = "goanalysis/facts/cache";
/// Fact export.
pub const GO_ANALYSIS_FACTS_EXPORT: &str = "goanalysis/facts/export";
/// Fact inheritance between packages.
pub const GO_ANALYSIS_FACTS_INHERIT: &str = "goanalysis/facts/inherit";

/// Debugs the `go-critic` linter.
pub const GO_CRITIC: &str = "gocritic";
/// Debugs `staticcheck` related linters.
pub const MEGACHECK: &str = "megacheck";
/// Debugs a filter excluding issues by `//nolint` comments.
pub const NOLINT: &str = "nolint";
/// Debugs the `revive` linter.
pub const REVIVE: &str = "revive";

/// Every registered name, in declaration order.
pub const ALL: &[&str] = &[
    AUTOGEN_EXCLUDE,
    BIN_SALT,
    CONFIG_READER,
    EMPTY,
    ENABLED_LINTERS,
    ENV,
    EXCLUDE_RULES,
    EXEC,
    FILENAME_UNADJUSTER,
    FORBIDIGO,
    GO_ENV,
    LINTER,
    LINTERS_CONTEXT,
    LINTERS_DB,
    LINTERS_OUTPUT,
    LOADER,
    MAX_FROM_LINTER,
    MAX_SAME_ISSUES,
    PKG_CACHE,
    RUNNER,
    SEVERITY_RULES,
    SKIP_DIRS,
    SOURCE_CODE,
    STOPWATCH,
    TAB_PRINTER,
    TEST,
    TEXT_PRINTER,
    GO_ANALYSIS,
    GO_ANALYSIS_ANALYZE,
    GO_ANALYSIS_ISSUES_CACHE,
    GO_ANALYSIS_MEMORY,
    GO_ANALYSIS_FACTS,
    GO_ANALYSIS_FACTS_CACHE,
    GO_ANALYSIS_FACTS_EXPORT,
    GO_ANALYSIS_FACTS_INHERIT,
    GO_CRITIC,
    MEGACHECK,
    NOLINT,
    REVIVE,
];

/// Returns `true` when `name` is one of the registered category names.
#[must_use]
pub fn is_registered(name: &str) -> bool {
    ALL.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn registered_names_are_unique() {
        let unique: FxHashSet<&str> = ALL.iter().copied().collect();
        assert_eq!(unique.len(), ALL.len());
    }

    #[test]
    fn analysis_children_share_parent_prefix() {
        for name in [
            GO_ANALYSIS_ANALYZE,
            GO_ANALYSIS_ISSUES_CACHE,
            GO_ANALYSIS_MEMORY,
            GO_ANALYSIS_FACTS,
        ] {
            assert!(name.starts_with("goanalysis/"), "{name}");
        }
        for name in [
            GO_ANALYSIS_FACTS_CACHE,
            GO_ANALYSIS_FACTS_EXPORT,
            GO_ANALYSIS_FACTS_INHERIT,
        ] {
            assert!(name.starts_with("goanalysis/facts/"), "{name}");
        }
    }

    #[test]
    fn empty_sentinel_is_registered() {
        assert_eq!(EMPTY, "");
        assert!(is_registered(EMPTY));
    }

    #[test]
    fn unknown_name_is_not_registered() {
        assert!(is_registered(RUNNER));
        assert!(!is_registered("runner2"));
        assert!(!is_registered("Runner"));
    }
}
