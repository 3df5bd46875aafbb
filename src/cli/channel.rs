//! Single channel lookup command.

use crate::cli::common::{print_json, wants_json, CliError, CliResult, ModuleArgs};
use clap::Args;
use serde::Serialize;

/// Print the channel identifier for one crosspoint
#[derive(Debug, Clone, Args)]
pub struct ChannelArgs {
    #[command(flatten)]
    module: ModuleArgs,

    /// Matrix row (1-based)
    #[arg(short, long)]
    pub row: u32,

    /// Matrix column (1-based)
    #[arg(short, long)]
    pub col: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ChannelOutput {
    layout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    wiring: Option<String>,
    row: u32,
    col: u32,
    channel: String,
}

impl ChannelArgs {
    /// Execute the channel command
    pub fn execute(&self) -> CliResult<()> {
        let (function, config) = self.module.resolve()?;
        let channel = function
            .channel(self.row, self.col)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if wants_json(self.json, &config) {
            print_json(&ChannelOutput {
                layout: function.layout().to_string(),
                wiring: function.wiring().map(|w| w.to_string()),
                row: self.row,
                col: self.col,
                channel: channel.to_string(),
            })?;
        } else {
            println!("{channel}");
        }

        Ok(())
    }
}
