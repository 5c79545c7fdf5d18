//! crates/logutils/src/macros.rs
//! Call-site macro for [`DebugFunc`](crate::DebugFunc).

/// Formats and emits through a [`DebugFunc`](crate::DebugFunc).
///
/// Arguments are evaluated like any call argument, but formatting only
/// happens when the function is active.
///
/// # Example
/// ```
/// use logutils::{debugf, EnabledDebugs};
///
/// let enabled = EnabledDebugs::parse("");
/// let debug = enabled.debug(logutils::keys::RUNNER);
/// debugf!(debug, "running {} linters", 3);
/// ```
#[macro_export]
macro_rules! debugf {
    ($func:expr, $($arg:tt)+) => {
        $func.call(::std::format_args!($($arg)+))
    };
}
