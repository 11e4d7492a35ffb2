use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Length budget used when no limit is given
pub const DEFAULT_LIMIT: usize = 160;

/// Extra characters a representation may exceed the limit by before it is cut
pub const GRACE_MARGIN: usize = 20;

/// A non-negative length budget for a representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Limit(usize);

impl Limit {
    pub const fn new(limit: usize) -> Self {
        Limit(limit)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of characters kept from each end when truncating
    pub const fn half_width(self) -> usize {
        self.0 / 2
    }

    /// Representation length at or above which truncation kicks in
    pub const fn threshold(self) -> usize {
        self.0.saturating_add(GRACE_MARGIN)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit(DEFAULT_LIMIT)
    }
}

impl From<usize> for Limit {
    fn from(limit: usize) -> Self {
        Limit(limit)
    }
}

impl TryFrom<i64> for Limit {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(Limit)
            .map_err(|_| Error::InvalidLimit(value))
    }
}

impl FromStr for Limit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: i64 = s
            .parse()
            .map_err(|_| Error::InvalidNumber(s.to_string()))?;
        Limit::try_from(value)
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
