//! src/level.rs
//! The six-level severity enumeration and its fixed line tags.

use std::fmt;
use std::str::FromStr;

/// Severity of a log record, lowest to highest.
///
/// The discriminant order defines the filtering rule: a record is emitted
/// iff its level is at or above the configured priority. The default
/// priority of the global logger is [`Level::Info`].
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Finest-grained diagnostics.
    Trace,
    /// Diagnostics useful while debugging.
    Debug,
    /// Routine operational messages.
    Info,
    /// Something unexpected that the process can tolerate.
    Warn,
    /// An operation failed.
    Error,
    /// A failure the process is unlikely to survive.
    Critical,
}

impl Level {
    /// All levels in ascending severity order.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Critical,
    ];

    /// The bracketed line tag for this level.
    ///
    /// Every tag is exactly seven bytes so message bodies line up across
    /// levels: `[TRACE]`, `[DEBUG]`, `[INFO ]`, `[WARN ]`, `[ERROR]`,
    /// `[CRIT ]`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Trace => "[TRACE]",
            Self::Debug => "[DEBUG]",
            Self::Info => "[INFO ]",
            Self::Warn => "[WARN ]",
            Self::Error => "[ERROR]",
            Self::Critical => "[CRIT ]",
        }
    }

    /// Lower-case name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Recovers a level from its `#[repr(u8)]` discriminant.
    pub(crate) const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            5 => Some(Self::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from an unrecognised name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLevelError {
    name: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {}", self.name)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name, case-insensitively. `"crit"` is accepted as a
    /// shorthand for `"critical"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "critical" | "crit" => Ok(Self::Critical),
            _ => Err(ParseLevelError { name: s.to_owned() }),
        }
    }
}
