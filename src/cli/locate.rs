//! Reverse lookup: channel identifier to crosspoint.

use crate::cli::common::{print_json, wants_json, CliError, CliResult, ModuleArgs};
use crate::models::ChannelId;
use clap::Args;
use serde::Serialize;

/// Find the crosspoint addressed by a channel identifier
#[derive(Debug, Clone, Args)]
pub struct LocateArgs {
    #[command(flatten)]
    module: ModuleArgs,

    /// Channel identifier (e.g., 401)
    #[arg(short, long, value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LocateOutput {
    layout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    wiring: Option<String>,
    channel: String,
    row: u32,
    col: u32,
}

impl LocateArgs {
    /// Execute the locate command
    pub fn execute(&self) -> CliResult<()> {
        let (function, config) = self.module.resolve()?;
        let id: ChannelId = self
            .id
            .parse()
            .map_err(|e: crate::error::NumberingError| CliError::validation(e.to_string()))?;

        let coordinate = function.locate(id).ok_or_else(|| {
            let wiring = function
                .wiring()
                .map(|w| format!(" ({w})"))
                .unwrap_or_default();
            CliError::validation(format!(
                "Channel {id} does not exist on layout {}{wiring}",
                function.layout()
            ))
        })?;

        if wants_json(self.json, &config) {
            print_json(&LocateOutput {
                layout: function.layout().to_string(),
                wiring: function.wiring().map(|w| w.to_string()),
                channel: id.to_string(),
                row: coordinate.row,
                col: coordinate.col,
            })?;
        } else {
            println!("Channel: {id}");
            println!("Row:     {}", coordinate.row);
            println!("Column:  {}", coordinate.col);
        }

        Ok(())
    }
}
