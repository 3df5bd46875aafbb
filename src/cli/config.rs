//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{Layout, WiringConfig};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default layout (4x32, 4x64, 4x128, 8x32, 8x64, 16x32)
    #[arg(long, value_name = "LAYOUT")]
    layout: Option<String>,

    /// Default wiring configuration for the default layout
    #[arg(long, value_name = "CONFIG", conflicts_with = "clear_wiring")]
    wiring: Option<String>,

    /// Remove the default wiring configuration
    #[arg(long)]
    clear_wiring: bool,

    /// Default to JSON output (true or false)
    #[arg(long, value_name = "BOOL")]
    json: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    defaults: DefaultsOutput,
    output: OutputOutput,
}

#[derive(Serialize, Debug)]
struct DefaultsOutput {
    layout: Option<String>,
    wiring: Option<String>,
}

#[derive(Serialize, Debug)]
struct OutputOutput {
    json: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let path = Config::config_file_path()
            .map(|p| p.display().to_string())
            .map_err(|e| CliError::io(format!("Failed to locate config file: {e}")))?;

        if self.json {
            print_json(&ConfigOutput {
                path,
                defaults: DefaultsOutput {
                    layout: config.defaults.layout.map(|l| l.to_string()),
                    wiring: config.defaults.wiring.map(|w| w.to_string()),
                },
                output: OutputOutput {
                    json: config.output.json,
                },
            })?;
        } else {
            output_human_readable(&config, &path);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.layout.is_none() && self.wiring.is_none() && !self.clear_wiring && self.json.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --layout, --wiring, --clear-wiring, or --json",
            ));
        }

        let mut config = load_config()?;

        if let Some(layout) = &self.layout {
            let layout: Layout = layout
                .parse()
                .map_err(|e: crate::error::NumberingError| CliError::validation(e.to_string()))?;

            // A wiring picked for another layout no longer applies.
            if config.defaults.layout != Some(layout) {
                config.defaults.wiring = None;
            }
            config.defaults.layout = Some(layout);
        }

        if let Some(wiring) = &self.wiring {
            let wiring: WiringConfig = wiring
                .parse()
                .map_err(|e: crate::error::NumberingError| CliError::validation(e.to_string()))?;
            config.defaults.wiring = Some(wiring);
        }

        if self.clear_wiring {
            config.defaults.wiring = None;
        }

        if let Some(json) = self.json {
            config.output.json = json;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &str) {
    println!("{APP_NAME} configuration: {path}");
    println!();
    println!("[defaults]");
    match config.defaults.layout {
        Some(layout) => println!("  layout: {layout}"),
        None => println!("  layout: (not set)"),
    }
    match config.defaults.wiring {
        Some(wiring) => println!("  wiring: {wiring}"),
        None => println!("  wiring: (not set)"),
    }
    println!();
    println!("[output]");
    println!("  json: {}", config.output.json);
}
