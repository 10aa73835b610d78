use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier assigned by the remote store.
///
/// Drafts that have not been created remotely yet don't have an id
/// at all, i.e. there is no sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

impl Id {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for Id {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<Id> for u64 {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
