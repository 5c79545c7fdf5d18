#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logutils/src/lib.rs
//!
//! # Overview
//!
//! `logutils` lets every subsystem of a large tool carry its own debug output,
//! switched on by name at process start through the `GL_DEBUG` environment
//! variable. A subsystem asks for a [`DebugFunc`] once and then calls it
//! freely; a category that was not requested costs nothing beyond a branch on
//! an enum discriminant, and its message is never formatted.
//!
//! # Design
//!
//! - [`keys`] lists the known category names. It is advisory: any string can
//!   be enabled or looked up.
//! - [`EnabledDebugs`] is the parsed `GL_DEBUG` value, an immutable hash set.
//!   The process-wide instance lives behind a [`OnceLock`](std::sync::OnceLock)
//!   and is either [`install`]ed explicitly or read from the environment on
//!   first use.
//! - [`debug`] and [`EnabledDebugs::debug`] build the per-category function:
//!   [`DebugFunc::Nop`] for disabled categories, otherwise a
//!   [`StderrLog`] named after the category and forced to
//!   [`LogLevel::Debug`].
//! - [`setup_verbose_log`] lets `--verbose` raise a shared logger to
//!   [`LogLevel::Info`].
//! - [`Log`] is the logger seam. [`StderrLog`] writes lines itself;
//!   [`TracingLog`] forwards to the tracing crate.
//!
//! # Invariants
//!
//! - Category matching is exact. `goanalysis` does not enable
//!   `goanalysis/facts`.
//! - The enabled set never changes after it is built; later edits to the
//!   environment are not observed.
//! - [`setup_verbose_log`] never makes a logger quieter.
//!
//! # Errors
//!
//! Nothing in the debug path can fail. An absent, empty or non-UTF-8
//! `GL_DEBUG` enables nothing, and unknown names simply never match. Parsing
//! a level name is the one fallible operation and reports
//! [`ParseLevelError`].
//!
//! # Examples
//!
//! ```
//! use logutils::{debugf, keys, EnabledDebugs, Log, LogLevel, SharedBuffer, StderrLog};
//! use std::sync::Arc;
//!
//! let enabled = EnabledDebugs::parse("linters_output,runner");
//! assert!(enabled.is_enabled(keys::RUNNER));
//! assert!(!enabled.is_enabled(keys::LINTERS_DB));
//!
//! let buffer = SharedBuffer::new();
//! let debug = enabled.debug_with(keys::RUNNER, |name: &str| -> Arc<dyn Log> {
//!     Arc::new(StderrLog::with_writer(name, buffer.clone()))
//! });
//! debugf!(debug, "running {} linters", 4);
//! debugf!(enabled.debug(keys::LINTERS_DB), "never formatted");
//!
//! assert_eq!(buffer.contents(), "[runner] debug: running 4 linters\n");
//! ```

mod config;
mod debug;
mod global;
pub mod keys;
mod level;
mod log;
mod macros;
mod stderr_log;
mod tracing_bridge;
mod verbosity;

pub use config::{DEBUG_ENV, EnabledDebugs, LOG_LEVEL_ENV, level_from_env_value};
pub use debug::DebugFunc;
pub use global::{debug, enabled_debugs, have_debug_tag, install};
pub use level::{LogLevel, ParseLevelError};
pub use log::Log;
pub use stderr_log::{SharedBuffer, StderrLog};
#[cfg(feature = "subscriber")]
pub use tracing_bridge::init_tracing;
pub use tracing_bridge::{LOG_TARGET, TracingLog};
pub use verbosity::setup_verbose_log;
