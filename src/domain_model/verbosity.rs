use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How much a logger is allowed to print, and how important a single message is.
///
/// Levels are ordered from the most severe to the most permissive. A logger
/// configured at a level prints every message whose level is less than or equal
/// to it, so `Info` prints `Info`, `Warn` and `Error` messages.
#[derive(
    Debug, Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Deserialize, clap::ValueEnum,
)]
#[serde(try_from = "VerbosityRepr")]
#[repr(u8)]
pub enum Verbosity {
    /// Only prints `error` messages.
    Error = 1,
    /// Prints `error` and `warn` messages.
    #[value(alias = "warning")]
    Warn = 2,
    /// Prints `error`, `warn` and `info` messages.
    Info = 3,
    /// Prints messages for all levels.
    #[default]
    Debug = 4,
}

impl Verbosity {
    pub const ALL: [Verbosity; 4] = [
        Verbosity::Error,
        Verbosity::Warn,
        Verbosity::Info,
        Verbosity::Debug,
    ];

    /// The tag written between brackets in every formatted line.
    ///
    /// `Warn` is tagged `WARNING`; downstream log scrapers match on it.
    pub const fn tag(self) -> &'static str {
        match self {
            Verbosity::Error => "ERROR",
            Verbosity::Warn => "WARNING",
            Verbosity::Info => "INFO",
            Verbosity::Debug => "DEBUG",
        }
    }

    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Whether a logger at `self` prints a message at `severity`.
    pub fn permits(self, severity: Verbosity) -> bool {
        self >= severity
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown verbosity {0:?}, expected error, warn, info, debug or 1-4")]
pub struct ParseVerbosityError(pub String);

impl TryFrom<u8> for Verbosity {
    type Error = ParseVerbosityError;

    fn try_from(level: u8) -> Result<Self, ParseVerbosityError> {
        match level {
            1 => Ok(Verbosity::Error),
            2 => Ok(Verbosity::Warn),
            3 => Ok(Verbosity::Info),
            4 => Ok(Verbosity::Debug),
            _ => Err(ParseVerbosityError(level.to_string())),
        }
    }
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(level) = trimmed.parse::<u8>() {
            return Verbosity::try_from(level);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "error" => Ok(Verbosity::Error),
            "warn" | "warning" => Ok(Verbosity::Warn),
            "info" => Ok(Verbosity::Info),
            "debug" => Ok(Verbosity::Debug),
            _ => Err(ParseVerbosityError(s.to_string())),
        }
    }
}

/// Settings files may spell a verbosity either by name or by number.
#[derive(Deserialize)]
#[serde(untagged)]
enum VerbosityRepr {
    Level(u8),
    Name(String),
}

impl TryFrom<VerbosityRepr> for Verbosity {
    type Error = ParseVerbosityError;

    fn try_from(repr: VerbosityRepr) -> Result<Self, ParseVerbosityError> {
        match repr {
            VerbosityRepr::Level(level) => Verbosity::try_from(level),
            VerbosityRepr::Name(name) => name.parse(),
        }
    }
}
