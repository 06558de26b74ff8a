// src/internal/severity/severity.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a log line, numbered the way syslog numbers priorities.
///
/// The numeric priority doubles as the line tag: `<0>` for emergency through `<7>` for
/// debug, which is what `journald` reads to colour and rank stderr output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Software is in a critical condition.
    Critical = 2,
    /// Software experienced an error.
    Error = 3,
    /// Software experienced a potential problem.
    Warning = 4,
    /// Software experienced a noteworthy event.
    Notice = 5,
    /// Software running information.
    Info = 6,
    /// Software debug information.
    Debug = 7,
}

impl Severity {
    /// Every level, most severe first.
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Line prefix written before every message of this level.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Emergency => "<0>",
            Severity::Alert => "<1>",
            Severity::Critical => "<2>",
            Severity::Error => "<3>",
            Severity::Warning => "<4>",
            Severity::Notice => "<5>",
            Severity::Info => "<6>",
            Severity::Debug => "<7>",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Alert => "alert",
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    pub fn from_priority(priority: u8) -> Option<Self> {
        Self::ALL.get(priority as usize).copied()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity level: {0}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Accepts level names, the short syslog spellings, `print` (an alias for debug) and
    /// bare priority digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emergency" | "emerg" | "0" => Ok(Severity::Emergency),
            "alert" | "1" => Ok(Severity::Alert),
            "critical" | "crit" | "2" => Ok(Severity::Critical),
            "error" | "err" | "3" => Ok(Severity::Error),
            "warning" | "warn" | "4" => Ok(Severity::Warning),
            "notice" | "5" => Ok(Severity::Notice),
            "info" | "6" => Ok(Severity::Info),
            "debug" | "print" | "7" => Ok(Severity::Debug),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Severity::Error,
            tracing::Level::WARN => Severity::Warning,
            tracing::Level::INFO => Severity::Info,
            // tracing has no finer level than debug on the syslog side
            tracing::Level::DEBUG | tracing::Level::TRACE => Severity::Debug,
        }
    }
}
