//! crates/logutils/src/level.rs
//! Ordered minimum-level values shared by every [`Log`](crate::Log).

use std::fmt;
use std::str::FromStr;

/// Minimum level a logger emits at. Variants are ordered from most to least
/// verbose, so `level >= logger.level()` decides whether a call is emitted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum LogLevel {
    /// Per-category diagnostics.
    Debug = 0,
    /// Progress shown with `--verbose`.
    Info = 1,
    /// Default level of a fresh logger.
    #[default]
    Warn = 2,
    /// Failures only.
    Error = 3,
}

impl LogLevel {
    /// Lower-case name used in rendered lines and `LOG_LEVEL`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a level name is not one of `debug`, `info`, `warn` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {input:?}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError {
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_from_verbose_to_quiet() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("Info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("error".parse::<LogLevel>(), Ok(LogLevel::Error));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.input(), "verbose");
        assert_eq!(err.to_string(), "unknown log level: \"verbose\"");
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn u8_conversion_matches_discriminants() {
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(LogLevel::from_u8(level as u8), level);
        }
        assert_eq!(LogLevel::from_u8(200), LogLevel::Error);
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(format!("{}", LogLevel::Debug), "debug");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn level_serializes_as_lowercase_name() {
            let json = serde_json::to_string(&LogLevel::Info).unwrap();
            assert_eq!(json, "\"info\"");
            let decoded: LogLevel = serde_json::from_str("\"error\"").unwrap();
            assert_eq!(decoded, LogLevel::Error);
        }
    }
}
