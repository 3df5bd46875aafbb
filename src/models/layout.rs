//! Switch matrix layouts (physical row × column topologies).

use crate::error::NumberingError;
use crate::models::WiringConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Physical row × column topology of the switch matrix module.
///
/// # Valid ranges
///
/// | Layout | Rows | Columns | Wiring configurations |
/// |--------|------|---------|-----------------------|
/// | 4x32   | 1-4  | 1-32    | M1H, M1L, M2H, M2L    |
/// | 4x64   | 1-4  | 1-64    | MH, ML                |
/// | 4x128  | 1-4  | 1-128   | none                  |
/// | 8x32   | 1-8  | 1-32    | MH, ML                |
/// | 8x64   | 1-8  | 1-64    | none                  |
/// | 16x32  | 1-16 | 1-32    | none                  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// 4 rows by 32 columns
    #[serde(rename = "4x32")]
    L4x32,
    /// 4 rows by 64 columns
    #[serde(rename = "4x64")]
    L4x64,
    /// 4 rows by 128 columns
    #[serde(rename = "4x128")]
    L4x128,
    /// 8 rows by 32 columns
    #[serde(rename = "8x32")]
    L8x32,
    /// 8 rows by 64 columns
    #[serde(rename = "8x64")]
    L8x64,
    /// 16 rows by 32 columns
    #[serde(rename = "16x32")]
    L16x32,
}

impl Layout {
    /// All supported layouts, in catalogue order.
    pub const ALL: [Self; 6] = [
        Self::L4x32,
        Self::L4x64,
        Self::L4x128,
        Self::L8x32,
        Self::L8x64,
        Self::L16x32,
    ];

    /// Canonical name as printed on the module (e.g., "4x32").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::L4x32 => "4x32",
            Self::L4x64 => "4x64",
            Self::L4x128 => "4x128",
            Self::L8x32 => "8x32",
            Self::L8x64 => "8x64",
            Self::L16x32 => "16x32",
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(self) -> u32 {
        match self {
            Self::L4x32 | Self::L4x64 | Self::L4x128 => 4,
            Self::L8x32 | Self::L8x64 => 8,
            Self::L16x32 => 16,
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(self) -> u32 {
        match self {
            Self::L4x32 | Self::L8x32 | Self::L16x32 => 32,
            Self::L4x64 | Self::L8x64 => 64,
            Self::L4x128 => 128,
        }
    }

    /// Valid (1-based) row numbers.
    #[must_use]
    pub const fn row_range(self) -> RangeInclusive<u32> {
        1..=self.rows()
    }

    /// Valid (1-based) column numbers.
    #[must_use]
    pub const fn col_range(self) -> RangeInclusive<u32> {
        1..=self.cols()
    }

    /// Total number of crosspoints.
    #[must_use]
    pub const fn channel_count(self) -> u32 {
        self.rows() * self.cols()
    }

    /// Wiring configurations this layout accepts. Empty when none is required.
    #[must_use]
    pub const fn wiring_configs(self) -> &'static [WiringConfig] {
        match self {
            Self::L4x32 => &[
                WiringConfig::M1H,
                WiringConfig::M1L,
                WiringConfig::M2H,
                WiringConfig::M2L,
            ],
            Self::L4x64 | Self::L8x32 => &[WiringConfig::MH, WiringConfig::ML],
            Self::L4x128 | Self::L8x64 | Self::L16x32 => &[],
        }
    }

    /// Returns true if a wiring configuration must be supplied.
    #[must_use]
    pub const fn requires_wiring(self) -> bool {
        !self.wiring_configs().is_empty()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = NumberingError;

    /// Parses "4x32", "4X32" or " 4x32 ".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str() == normalized)
            .ok_or_else(|| NumberingError::UnknownLayout(s.to_string()))
    }
}
