//! Switch Matrix Library
//!
//! Channel numbering for multi-configuration switch matrix modules: maps a
//! (row, column) crosspoint under a layout and wiring configuration to the
//! identifier the instrument uses to address that relay.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod numbering;

pub use error::{NumberingError, Result};
pub use numbering::{get_numbering_function, get_numbering_function_by_name, NumberingFunction};
