//! Channel numbering functions for switch matrix layouts.
//!
//! [`get_numbering_function`] resolves a layout and optional wiring
//! configuration into a [`NumberingFunction`], which maps a (row, column)
//! crosspoint to the identifier the instrument uses for that relay.
//!
//! ```
//! use switch_matrix::models::{Layout, WiringConfig};
//! use switch_matrix::numbering::get_numbering_function;
//!
//! let f = get_numbering_function(Layout::L4x32, Some(WiringConfig::M2L)).unwrap();
//! assert_eq!(f.channel(2, 5).unwrap().to_string(), "401");
//! ```

pub mod scheme;

use crate::error::{Axis, NumberingError, Result};
use crate::models::{ChannelCoordinate, ChannelId, Layout, WiringConfig};
pub use scheme::{wiring_offset, Scheme};
use tracing::debug;

/// Builds the numbering function for a layout.
///
/// `wiring` must be `Some` exactly when the layout requires a wiring
/// configuration, and must be one the layout accepts.
pub fn get_numbering_function(
    layout: Layout,
    wiring: Option<WiringConfig>,
) -> Result<NumberingFunction> {
    let offset = wiring_offset(layout, wiring)?;
    let scheme = Scheme::for_layout(layout);

    debug!(%layout, wiring = ?wiring, offset, ?scheme, "resolved numbering function");

    Ok(NumberingFunction {
        layout,
        wiring,
        scheme,
        offset,
    })
}

/// Builds a numbering function from textual layout and wiring names
/// (e.g., `"4x32"`, `Some("M1H")`).
pub fn get_numbering_function_by_name(
    layout: &str,
    wiring: Option<&str>,
) -> Result<NumberingFunction> {
    let layout: Layout = layout.parse()?;
    let wiring = wiring.map(str::parse::<WiringConfig>).transpose()?;
    get_numbering_function(layout, wiring)
}

/// Resolved numbering function for one layout/wiring pair.
///
/// Holds the scheme and offset so evaluation is plain arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingFunction {
    layout: Layout,
    wiring: Option<WiringConfig>,
    scheme: Scheme,
    offset: u32,
}

impl NumberingFunction {
    /// Layout this function numbers.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Wiring configuration, if the layout takes one.
    #[must_use]
    pub const fn wiring(&self) -> Option<WiringConfig> {
        self.wiring
    }

    /// Channel offset selected by the wiring configuration.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Numbering scheme in use.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns the channel identifier for an in-range crosspoint.
    ///
    /// # Errors
    ///
    /// Returns [`NumberingError::CoordinateOutOfRange`] when `row` or `col`
    /// falls outside the layout's valid ranges.
    pub fn channel(&self, row: u32, col: u32) -> Result<ChannelId> {
        self.check_range(Axis::Row, row)?;
        self.check_range(Axis::Column, col)?;

        // In-range coordinates number to small positive values.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = self.scheme.evaluate(row, col, self.offset) as u32;
        Ok(ChannelId::new(value))
    }

    /// Evaluates the raw formula as a decimal string, without range checks.
    ///
    /// Out-of-range coordinates produce whatever the formula yields; they may
    /// collide with other channels or not name a physical relay at all.
    #[must_use]
    pub fn channel_unchecked(&self, row: u32, col: u32) -> String {
        self.scheme.evaluate(row, col, self.offset).to_string()
    }

    /// Converts into a plain `(row, col) -> String` closure with the
    /// unchecked semantics of [`Self::channel_unchecked`].
    pub fn into_fn(self) -> impl Fn(u32, u32) -> String + Copy + Send + Sync {
        move |row, col| self.channel_unchecked(row, col)
    }

    /// Finds the in-range crosspoint numbered `id`, if any.
    #[must_use]
    pub fn locate(&self, id: ChannelId) -> Option<ChannelCoordinate> {
        let target = i64::from(id.value());
        let cols = self.layout.col_range();

        self.layout.row_range().find_map(|row| {
            let col = target - self.scheme.evaluate(row, 0, self.offset);
            u32::try_from(col)
                .ok()
                .filter(|col| cols.contains(col))
                .map(|col| ChannelCoordinate::new(row, col))
        })
    }

    /// Iterates every crosspoint of the layout in row-major order.
    pub fn channels(&self) -> impl Iterator<Item = (ChannelCoordinate, ChannelId)> {
        let function = *self;
        self.layout.row_range().flat_map(move |row| {
            function.layout.col_range().map(move |col| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let value = function.scheme.evaluate(row, col, function.offset) as u32;
                (ChannelCoordinate::new(row, col), ChannelId::new(value))
            })
        })
    }

    fn check_range(&self, axis: Axis, value: u32) -> Result<()> {
        let range = match axis {
            Axis::Row => self.layout.row_range(),
            Axis::Column => self.layout.col_range(),
        };

        if range.contains(&value) {
            Ok(())
        } else {
            Err(NumberingError::CoordinateOutOfRange {
                layout: self.layout,
                axis,
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }
}
