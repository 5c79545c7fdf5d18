//! crates/logutils/src/verbosity.rs
//! `--verbose` handling for a shared logger.

use super::level::LogLevel;
use super::log::Log;

/// Makes `log` emit info and above when `is_verbose` is set.
///
/// The level only ever moves towards more output: a logger already at
/// [`LogLevel::Debug`] or [`LogLevel::Info`] is left alone, and
/// `is_verbose == false` never touches it.
pub fn setup_verbose_log<L>(log: &L, is_verbose: bool)
where
    L: Log + ?Sized,
{
    if !is_verbose {
        return;
    }

    let previous = log.level();
    if previous > LogLevel::Info {
        log.set_level(LogLevel::Info);
        tracing::debug!(target: "logutils", %previous, "verbose output enabled");
    }
}
