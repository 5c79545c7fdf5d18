//! crates/logutils/src/stderr_log.rs
//! Line-oriented [`Log`] that writes to stderr or any shared writer.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::config::default_level;
use super::level::LogLevel;
use super::log::Log;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Named logger rendering one `[name] level: message` line per emission.
///
/// Children created through [`Log::child`] are named `parent/child`, start at
/// the parent's current level and write through the same destination, so
/// lines from a whole logger tree never interleave mid-line.
pub struct StderrLog {
    name: String,
    level: AtomicU8,
    writer: SharedWriter,
}

impl StderrLog {
    /// Creates a logger on stderr whose level comes from `LOG_LEVEL`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_writer(name, io::stderr())
    }

    /// Creates a logger on an arbitrary writer, starting at the `LOG_LEVEL`
    /// default.
    #[must_use]
    pub fn with_writer<W>(name: impl Into<String>, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let writer: Box<dyn Write + Send> = Box::new(writer);
        Self::from_parts(name.into(), default_level(), Arc::new(Mutex::new(writer)))
    }

    fn from_parts(name: String, level: LogLevel, writer: SharedWriter) -> Self {
        Self {
            name,
            level: AtomicU8::new(level as u8),
            writer,
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

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // Write failures belong to the destination; there is nowhere to report them.
        let _ = if self.name.is_empty() {
            writeln!(writer, "{level}: {args}")
        } else {
            writeln!(writer, "[{}] {level}: {args}", self.name)
        };
    }
}

impl fmt::Debug for StderrLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StderrLog")
            .field("name", &self.name)
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

impl Log for StderrLog {
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
        Arc::new(Self::from_parts(full, self.level(), Arc::clone(&self.writer)))
    }

    fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }
}

/// Cloneable in-memory writer whose clones all append to one buffer.
///
/// Hand a clone to [`StderrLog::with_writer`] and keep another to read back
/// what was logged.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Returns `true` when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
