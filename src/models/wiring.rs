//! Wiring configurations (bank selection within a layout).

use crate::error::NumberingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named sub-mode of a layout selecting which bank of the matrix is addressed.
///
/// `M1H`/`M1L`/`M2H`/`M2L` belong to the 4x32 layout, `MH`/`ML` to 4x64 and
/// 8x32. See [`crate::models::Layout::wiring_configs`].
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WiringConfig {
    /// Matrix 1, high bank
    M1H,
    /// Matrix 1, low bank
    M1L,
    /// Matrix 2, high bank
    M2H,
    /// Matrix 2, low bank
    M2L,
    /// High bank
    MH,
    /// Low bank
    ML,
}

impl WiringConfig {
    /// All wiring configurations.
    pub const ALL: [Self; 6] = [Self::M1H, Self::M1L, Self::M2H, Self::M2L, Self::MH, Self::ML];

    /// Canonical tag (e.g., "M1H").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M1H => "M1H",
            Self::M1L => "M1L",
            Self::M2H => "M2H",
            Self::M2L => "M2L",
            Self::MH => "MH",
            Self::ML => "ML",
        }
    }
}

impl fmt::Display for WiringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WiringConfig {
    type Err = NumberingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|wiring| wiring.as_str() == normalized)
            .ok_or_else(|| NumberingError::UnknownWiring(s.to_string()))
    }
}
