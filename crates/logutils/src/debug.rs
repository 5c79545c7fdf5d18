//! crates/logutils/src/debug.rs
//! Per-category debug functions.
//!
//! Whether a category logs is decided once, when its [`DebugFunc`] is built.
//! Subsystems keep the returned value (typically in a field or a
//! `LazyLock`) and call it unconditionally; a disabled category costs a
//! single discriminant check per call and never formats its arguments.

use std::fmt;
use std::sync::Arc;

use super::config::EnabledDebugs;
use super::level::LogLevel;
use super::log::Log;
use super::stderr_log::StderrLog;

/// Debug output for one category: either bound to a logger or inert.
#[derive(Clone, Default)]
pub enum DebugFunc {
    /// Discards every call.
    #[default]
    Nop,
    /// Forwards every call to the logger's debug level.
    Active(Arc<dyn Log>),
}

impl DebugFunc {
    /// The shared inert function.
    pub const NOP: Self = Self::Nop;

    /// Emits `args` at debug level when active.
    ///
    /// Prefer the [`debugf!`](crate::debugf) macro, which builds the
    /// `fmt::Arguments` for you.
    #[inline]
    pub fn call(&self, args: fmt::Arguments<'_>) {
        if let Self::Active(log) = self {
            log.debugf(args);
        }
    }

    /// Returns `true` when calls reach a logger.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

impl PartialEq for DebugFunc {
    /// Inert functions are all equal; active ones only when they share a logger.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nop, Self::Nop) => true,
            (Self::Active(a), Self::Active(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for DebugFunc {}

impl fmt::Debug for DebugFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nop => f.write_str("DebugFunc::Nop"),
            Self::Active(log) => f
                .debug_struct("DebugFunc::Active")
                .field("name", &log.name())
                .field("level", &log.level())
                .finish(),
        }
    }
}

impl EnabledDebugs {
    /// Builds the debug function for `key`, backed by a [`StderrLog`] named
    /// after the category.
    #[must_use]
    pub fn debug(&self, key: &str) -> DebugFunc {
        self.debug_with(key, |name: &str| -> Arc<dyn Log> { Arc::new(StderrLog::new(name)) })
    }

    /// Builds the debug function for `key` with a caller-supplied logger.
    ///
    /// `make_log` only runs for enabled categories. The logger's level is
    /// forced to [`LogLevel::Debug`] so a global verbosity setting never hides
    /// an explicitly requested category.
    pub fn debug_with<F>(&self, key: &str, make_log: F) -> DebugFunc
    where
        F: FnOnce(&str) -> Arc<dyn Log>,
    {
        if !self.is_enabled(key) {
            return DebugFunc::NOP;
        }

        let log = make_log(key);
        log.set_level(LogLevel::Debug);
        DebugFunc::Active(log)
    }
}
