//! Error types for channel numbering.

use crate::models::{Layout, WiringConfig};
use thiserror::Error;

/// Result type for numbering operations
pub type Result<T> = std::result::Result<T, NumberingError>;

/// Matrix axis named in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Matrix row
    Row,
    /// Matrix column
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// Invalid-argument errors raised while building or evaluating a numbering function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberingError {
    /// Layout name is not one of the supported layouts
    #[error("Unknown layout '{0}' (expected one of 4x32, 4x64, 4x128, 8x32, 8x64, 16x32)")]
    UnknownLayout(String),

    /// Wiring configuration name is not recognized
    #[error("Unknown wiring configuration '{0}' (expected one of M1H, M1L, M2H, M2L, MH, ML)")]
    UnknownWiring(String),

    /// Layout needs a wiring configuration and none was given
    #[error("Layout {layout} requires a wiring configuration ({})", format_wirings(.layout))]
    MissingWiring {
        /// Layout that was requested
        layout: Layout,
    },

    /// Wiring configuration belongs to a different layout
    #[error("Wiring configuration {wiring} is not valid for layout {layout} ({})", format_wirings(.layout))]
    InvalidWiring {
        /// Layout that was requested
        layout: Layout,
        /// Rejected wiring configuration
        wiring: WiringConfig,
    },

    /// Wiring configuration given for a layout that takes none
    #[error("Layout {layout} does not take a wiring configuration (got {wiring})")]
    UnexpectedWiring {
        /// Layout that was requested
        layout: Layout,
        /// Wiring configuration that was supplied
        wiring: WiringConfig,
    },

    /// Row or column outside the layout's valid range
    #[error("{axis} {value} is out of range for layout {layout} (valid: {min}-{max})")]
    CoordinateOutOfRange {
        /// Layout being numbered
        layout: Layout,
        /// Axis that is out of range
        axis: Axis,
        /// Offending row or column
        value: u32,
        /// Lowest valid value
        min: u32,
        /// Highest valid value
        max: u32,
    },

    /// Text is not a canonical decimal channel identifier
    #[error("Invalid channel identifier '{0}' (expected decimal digits without leading zeros)")]
    InvalidChannelId(String),
}

fn format_wirings(layout: &Layout) -> String {
    let wirings = layout.wiring_configs();
    if wirings.is_empty() {
        return "none".to_string();
    }
    wirings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
