//! crates/logutils/src/config.rs
//! Environment configuration: the enabled debug set and the default level.

use std::env;
use std::sync::OnceLock;

use rustc_hash::FxHashSet;

use super::level::LogLevel;

/// Comma-separated list of debug categories to enable, e.g.
/// `GL_DEBUG=goanalysis/analyze,goanalysis/facts`.
pub const DEBUG_ENV: &str = "GL_DEBUG";

/// Default minimum level for newly created [`StderrLog`](crate::StderrLog)s.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Set of debug category names enabled for this run.
///
/// Built once and never mutated, so a shared reference can be read from any
/// number of threads without locking. Membership is an exact string match;
/// no trimming, case folding or prefix matching is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EnabledDebugs {
    keys: FxHashSet<String>,
}

impl EnabledDebugs {
    /// An empty set: every category is disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw `GL_DEBUG` value.
    ///
    /// An empty value enables nothing. Otherwise every comma-separated token is
    /// inserted verbatim, including the empty tokens produced by leading,
    /// trailing or doubled commas.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::new();
        }

        let keys: FxHashSet<String> = raw.split(',').map(str::to_owned).collect();
        tracing::debug!(target: "logutils", raw, enabled = keys.len(), "resolved debug categories");
        Self { keys }
    }

    /// Parses an optional raw value; `None` behaves like an empty string.
    #[must_use]
    pub fn from_env_value(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::new, Self::parse)
    }

    /// Reads [`DEBUG_ENV`] from the process environment.
    ///
    /// A value that is not valid UTF-8 is treated as absent.
    #[must_use]
    pub fn from_env() -> Self {
        let raw = env::var_os(DEBUG_ENV);
        Self::from_env_value(raw.as_deref().and_then(|value| value.to_str()))
    }

    /// Exact-match membership test.
    #[must_use]
    pub fn is_enabled(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct enabled names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when no category is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Enabled names in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for EnabledDebugs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Level that a [`LOG_LEVEL_ENV`] value selects; absent or unknown means warn.
#[must_use]
pub fn level_from_env_value(raw: Option<&str>) -> LogLevel {
    match raw.map(str::parse::<LogLevel>) {
        Some(Ok(level)) => level,
        Some(Err(err)) => {
            tracing::debug!(target: "logutils", %err, "ignoring {LOG_LEVEL_ENV}");
            LogLevel::default()
        }
        None => LogLevel::default(),
    }
}

/// Default level for new loggers, read from [`LOG_LEVEL_ENV`] on first use.
pub fn default_level() -> LogLevel {
    static DEFAULT_LEVEL: OnceLock<LogLevel> = OnceLock::new();

    *DEFAULT_LEVEL.get_or_init(|| {
        let raw = env::var_os(LOG_LEVEL_ENV);
        level_from_env_value(raw.as_deref().and_then(|value| value.to_str()))
    })
}
