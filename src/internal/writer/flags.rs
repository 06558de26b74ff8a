use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Header decoration applied by a [`Writer`](super::Writer) before each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// `2009/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// `01:23:23.123123`, implies TIME
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// full source path and line
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// source file name and line, overrides LONG_FILE
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// timestamps in UTC rather than local time
    pub const UTC: Flags = Flags(1 << 5);
    /// tag goes right before the message instead of at line start
    pub const MSG_PREFIX: Flags = Flags(1 << 6);

    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const NAMED: [(&'static str, Flags); 7] = [
        ("date", Flags::DATE),
        ("time", Flags::TIME),
        ("microseconds", Flags::MICROSECONDS),
        ("longfile", Flags::LONG_FILE),
        ("shortfile", Flags::SHORT_FILE),
        ("utc", Flags::UTC),
        ("msgprefix", Flags::MSG_PREFIX),
    ];

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub(crate) fn wants_time(self) -> bool {
        self.contains(Flags::TIME) || self.contains(Flags::MICROSECONDS)
    }

    pub(crate) fn wants_file(self) -> bool {
        self.contains(Flags::SHORT_FILE) || self.contains(Flags::LONG_FILE)
    }

    /// Names of the individual flags that are set, in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn from_names<I, S>(names: I) -> Result<Flags, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(Flags::NONE, |acc, name| Ok(acc | name.as_ref().parse::<Flags>()?))
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        *self = self.union(rhs);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    #[error("unknown flag: {0}")]
    Unknown(String),
}

impl FromStr for Flags {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if name == "std" {
            return Ok(Flags::STD);
        }
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, flag)| *flag)
            .ok_or(FlagError::Unknown(s.to_string()))
    }
}

impl TryFrom<Vec<String>> for Flags {
    type Error = FlagError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Flags::from_names(names)
    }
}

impl From<Flags> for Vec<String> {
    fn from(flags: Flags) -> Self {
        flags.names().into_iter().map(str::to_string).collect()
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join("|"))
    }
}
