//! Channel coordinates and identifiers.

use crate::error::NumberingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Crosspoint position on the matrix (1-based row and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChannelCoordinate {
    /// Matrix row (1-based)
    pub row: u32,
    /// Matrix column (1-based)
    pub col: u32,
}

impl ChannelCoordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for ChannelCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Channel identifier the instrument uses to address one relay.
///
/// Displays as canonical decimal digits (no sign, no leading zeros).
/// Serializes as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ChannelId(u32);

impl ChannelId {
    /// Wraps a computed channel number.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Numeric value of the identifier.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChannelId {
    type Err = NumberingError;

    /// Accepts only canonical decimal digits: "101" but not "+101", "0101" or "".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NumberingError::InvalidChannelId(s.to_string());

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(invalid());
        }

        s.parse::<u32>().map(Self).map_err(|_| invalid())
    }
}

impl From<ChannelId> for String {
    fn from(id: ChannelId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ChannelId {
    type Error = NumberingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
