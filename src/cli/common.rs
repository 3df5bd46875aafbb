//! Shared CLI plumbing: error type, exit codes and argument resolution.

use crate::config::Config;
use crate::models::{Layout, WiringConfig};
use crate::numbering::{get_numbering_function, NumberingFunction};
use clap::Args;
use serde::Serialize;
use std::fmt;

/// Process exit codes used by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad arguments, out-of-range coordinates, unknown identifiers
    ValidationError = 1,
    /// Configuration could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or configuration failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Layout selection flags shared by every numbering command.
#[derive(Debug, Clone, Args)]
pub struct ModuleArgs {
    /// Matrix layout (4x32, 4x64, 4x128, 8x32, 8x64, 16x32); defaults to the configured layout
    #[arg(short, long, value_name = "LAYOUT")]
    pub layout: Option<String>,

    /// Wiring configuration (M1H, M1L, M2H, M2L for 4x32; MH, ML for 4x64 and 8x32)
    #[arg(short, long, value_name = "CONFIG")]
    pub wiring: Option<String>,
}

impl ModuleArgs {
    /// Resolves flags and configured defaults into a numbering function.
    ///
    /// Loads the config file once and hands it back so the caller can read
    /// its output preferences without loading it again.
    pub fn resolve(&self) -> CliResult<(NumberingFunction, Config)> {
        let layout = self
            .layout
            .as_deref()
            .map(str::parse::<Layout>)
            .transpose()
            .map_err(|e| CliError::validation(e.to_string()))?;
        let wiring = self
            .wiring
            .as_deref()
            .map(str::parse::<WiringConfig>)
            .transpose()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let config = load_config()?;
        let (layout, wiring) = config.resolve(layout, wiring).ok_or_else(|| {
            CliError::validation(
                "No layout given. Pass --layout or set a default with `config set --layout`",
            )
        })?;

        let function = get_numbering_function(layout, wiring)
            .map_err(|e| CliError::validation(e.to_string()))?;
        Ok((function, config))
    }
}

/// Loads the configuration, mapping failures to an I/O error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Returns true when output should be JSON (flag or configured preference).
#[must_use]
pub const fn wants_json(flag: bool, config: &Config) -> bool {
    flag || config.output.json
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("bad").exit_code.code(), 1);
        assert_eq!(CliError::io("disk").exit_code.code(), 2);
    }

    #[test]
    fn test_wants_json() {
        let mut config = Config::new();
        assert!(!wants_json(false, &config));
        assert!(wants_json(true, &config));
        config.output.json = true;
        assert!(wants_json(false, &config));
    }

    #[test]
    fn test_cli_error_display() {
        assert_eq!(CliError::validation("row 9 is out of range").to_string(), "row 9 is out of range");
    }
}
