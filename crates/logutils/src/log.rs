//! crates/logutils/src/log.rs
//! The leveled, named logger capability consumed by the debug factory.

use std::fmt;
use std::sync::Arc;

use super::level::LogLevel;

/// A named sink with a mutable minimum level.
///
/// Implementations must tolerate concurrent calls from any thread, including a
/// [`set_level`](Self::set_level) racing with emissions. The new level only has
/// to become visible eventually.
pub trait Log: Send + Sync {
    /// Emits at [`LogLevel::Error`].
    fn errorf(&self, args: fmt::Arguments<'_>);
    /// Emits at [`LogLevel::Warn`].
    fn warnf(&self, args: fmt::Arguments<'_>);
    /// Emits at [`LogLevel::Info`].
    fn infof(&self, args: fmt::Arguments<'_>);
    /// Emits at [`LogLevel::Debug`].
    fn debugf(&self, args: fmt::Arguments<'_>);

    /// The logger's full name, `parent/child` for children.
    fn name(&self) -> &str;

    /// Returns a logger named `name` below this one, sharing its destination.
    fn child(&self, name: &str) -> Arc<dyn Log>;

    /// Replaces the minimum level.
    fn set_level(&self, level: LogLevel);

    /// Current minimum level.
    fn level(&self) -> LogLevel;

    /// Reports whether a call at `level` would be emitted.
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }
}

impl<L: Log + ?Sized> Log for Arc<L> {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        (**self).errorf(args);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        (**self).warnf(args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        (**self).infof(args);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        (**self).debugf(args);
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn child(&self, name: &str) -> Arc<dyn Log> {
        (**self).child(name)
    }

    fn set_level(&self, level: LogLevel) {
        (**self).set_level(level);
    }

    fn level(&self) -> LogLevel {
        (**self).level()
    }
}
