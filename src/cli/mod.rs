//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the numbering
//! functions for lab automation scripts and CI.

pub mod channel;
pub mod common;
pub mod config;
pub mod layouts;
pub mod locate;
pub mod table;

// Re-export types used by main.rs and tests
pub use channel::ChannelArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layouts::LayoutsArgs;
pub use locate::LocateArgs;
pub use table::TableArgs;
