//! crates/logutils/src/tracing_bridge.rs
//! Bridge between [`Log`] and the tracing crate.
//!
//! [`TracingLog`] turns every emission into a tracing event on the
//! [`LOG_TARGET`] target, carrying the logger name in a `category` field.
//! The logger keeps its own minimum level, so a category forced to debug by
//! the factory still produces events while the subscriber stays at `warn`
//! for everything else.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logutils::{init_tracing, setup_verbose_log, Log, TracingLog};
//!
//! init_tracing(false)?;
//! let log = TracingLog::new("main");
//! setup_verbose_log(&log, true);
//! log.infof(format_args!("linting"));
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use super::config::default_level;
use super::level::LogLevel;
use super::log::Log;

/// Target of every event emitted by a [`TracingLog`].
pub const LOG_TARGET: &str = "logutils::log";

/// A [`Log`] that emits tracing events instead of writing lines itself.
pub struct TracingLog {
    name: String,
    level: AtomicU8,
}

impl TracingLog {
    /// Creates a logger whose level comes from `LOG_LEVEL`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(default_level() as u8),
        }
    }

    /// Builder-style level override.
    #[must_use]
    pub fn with_level(self, level: LogLevel) -> Self {
        self.set_level(level);
        self
    }

    fn emit(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }

        let category = self.name.as_str();
        match level {
            LogLevel::Debug => tracing::debug!(target: LOG_TARGET, category, "{args}"),
            LogLevel::Info => tracing::info!(target: LOG_TARGET, category, "{args}"),
            LogLevel::Warn => tracing::warn!(target: LOG_TARGET, category, "{args}"),
            LogLevel::Error => tracing::error!(target: LOG_TARGET, category, "{args}"),
        }
    }
}

impl fmt::Debug for TracingLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracingLog")
            .field("name", &self.name)
            .field("level", &self.level())
            .finish()
    }
}

impl Log for TracingLog {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Error, args);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Warn, args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Info, args);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Debug, args);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn child(&self, name: &str) -> Arc<dyn Log> {
        let full = if self.name.is_empty() {
            name.to_owned()
        } else {
            format!("{}/{name}", self.name)
        };
        Arc::new(Self::new(full).with_level(self.level()))
    }

    fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }
}

/// Installs a stderr `fmt` subscriber for [`TracingLog`] output.
///
/// `RUST_LOG` wins when set. Otherwise the filter admits warnings (info when
/// `verbose`) from everywhere plus every event on [`LOG_TARGET`], leaving
/// the per-logger levels in charge of debug categories.
#[cfg(feature = "subscriber")]
pub fn init_tracing(verbose: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

#[cfg(feature = "subscriber")]
fn default_directives(verbose: bool) -> String {
    let base = if verbose { "info" } else { "warn" };
    format!("{base},{LOG_TARGET}=trace")
}
