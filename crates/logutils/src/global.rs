//! crates/logutils/src/global.rs
//! Process-wide enabled debug set.

use std::sync::OnceLock;

use super::config::EnabledDebugs;
use super::debug::DebugFunc;

static ENABLED_DEBUGS: OnceLock<EnabledDebugs> = OnceLock::new();

/// Installs the process-wide set explicitly.
///
/// Call this during startup, before any subsystem builds its debug
/// functions. Returns the rejected set when one is already in place, either
/// from an earlier `install` or because a lookup already read `GL_DEBUG`.
pub fn install(enabled: EnabledDebugs) -> Result<(), EnabledDebugs> {
    let count = enabled.len();
    ENABLED_DEBUGS.set(enabled)?;
    tracing::debug!(target: "logutils", enabled = count, "installed debug categories");
    Ok(())
}

/// The process-wide set, read from `GL_DEBUG` on first use unless
/// [`install`] ran earlier.
pub fn enabled_debugs() -> &'static EnabledDebugs {
    ENABLED_DEBUGS.get_or_init(EnabledDebugs::from_env)
}

/// Debug function for `key` under the process-wide set.
///
/// Build it once per subsystem and keep it; the enabled check is not repeated
/// on each call.
#[must_use]
pub fn debug(key: &str) -> DebugFunc {
    enabled_debugs().debug(key)
}

/// Reports whether `key` is enabled in the process-wide set.
///
/// Useful to skip computing expensive debug-only values.
#[must_use]
pub fn have_debug_tag(key: &str) -> bool {
    enabled_debugs().is_enabled(key)
}
