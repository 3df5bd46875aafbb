//! Numbering schemes and wiring offsets.
//!
//! Each layout numbers its crosspoints with one of three arithmetic schemes.
//! Rows occupy fixed-width bands of the channel space and columns (plus the
//! wiring offset) never reach the next band, so every scheme is injective
//! over its layout's valid domain:
//!
//! | Scheme       | Formula               | Band | Max `col + offset` |
//! |--------------|-----------------------|------|--------------------|
//! | Interleaved  | `100*(2r-1) + c + o`  | 200  | 128                |
//! | Banked       | `100*r + c + o`       | 100  | 64                 |
//! | HalfHundred  | `50*(r+1) + c`        | 50   | 32                 |

use crate::error::{NumberingError, Result};
use crate::models::{Layout, WiringConfig};

/// Arithmetic used to turn (row, column, offset) into a channel number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// `100*(2r-1) + c + o` (4x32, 4x64, 4x128)
    Interleaved,
    /// `100*r + c + o` (8x32, 8x64)
    Banked,
    /// `50*(r+1) + c` (16x32)
    HalfHundred,
}

impl Scheme {
    /// Scheme used by a layout.
    #[must_use]
    pub const fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::L4x32 | Layout::L4x64 | Layout::L4x128 => Self::Interleaved,
            Layout::L8x32 | Layout::L8x64 => Self::Banked,
            Layout::L16x32 => Self::HalfHundred,
        }
    }

    /// Evaluates the formula without range checks.
    ///
    /// Uses `i64` so any `u32` row/column is representable; row 0 on the
    /// interleaved scheme yields a negative number.
    #[must_use]
    pub fn evaluate(self, row: u32, col: u32, offset: u32) -> i64 {
        let (r, c, o) = (i64::from(row), i64::from(col), i64::from(offset));
        match self {
            Self::Interleaved => 100 * (2 * r - 1) + c + o,
            Self::Banked => 100 * r + c + o,
            Self::HalfHundred => 50 * (r + 1) + c,
        }
    }
}

/// Resolves the channel offset for a layout/wiring pair.
///
/// Offsets come from the module's channel numbering tables:
///
/// - 4x32: M1H 0, M2H 32, M1L 64, M2L 96
/// - 4x64: MH 0, ML 64
/// - 8x32: MH 0, ML 32
/// - 4x128, 8x64, 16x32: no wiring configuration, offset 0
pub fn wiring_offset(layout: Layout, wiring: Option<WiringConfig>) -> Result<u32> {
    use Layout::{L16x32, L4x128, L4x32, L4x64, L8x32, L8x64};
    use WiringConfig::{M1H, M1L, M2H, M2L, MH, ML};

    match (layout, wiring) {
        (L4x32, Some(M1H)) => Ok(0),
        (L4x32, Some(M2H)) => Ok(32),
        (L4x32, Some(M1L)) => Ok(64),
        (L4x32, Some(M2L)) => Ok(96),
        (L4x64, Some(MH)) => Ok(0),
        (L4x64, Some(ML)) => Ok(64),
        (L8x32, Some(MH)) => Ok(0),
        (L8x32, Some(ML)) => Ok(32),
        (L4x128 | L8x64 | L16x32, None) => Ok(0),
        (L4x128 | L8x64 | L16x32, Some(wiring)) => {
            Err(NumberingError::UnexpectedWiring { layout, wiring })
        }
        (L4x32 | L4x64 | L8x32, Some(wiring)) => {
            Err(NumberingError::InvalidWiring { layout, wiring })
        }
        (L4x32 | L4x64 | L8x32, None) => Err(NumberingError::MissingWiring { layout }),
    }
}
