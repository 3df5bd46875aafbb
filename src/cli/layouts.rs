//! List supported layouts.

use crate::cli::common::{load_config, print_json, wants_json, CliResult};
use crate::models::Layout;
use clap::Args;
use serde::Serialize;

/// List supported layouts with their ranges and wiring configurations
#[derive(Debug, Clone, Args)]
pub struct LayoutsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LayoutInfo {
    name: String,
    rows: u32,
    cols: u32,
    channels: u32,
    wiring_configs: Vec<String>,
}

impl From<Layout> for LayoutInfo {
    fn from(layout: Layout) -> Self {
        Self {
            name: layout.to_string(),
            rows: layout.rows(),
            cols: layout.cols(),
            channels: layout.channel_count(),
            wiring_configs: layout
                .wiring_configs()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl LayoutsArgs {
    /// Execute the layouts command
    pub fn execute(&self) -> CliResult<()> {
        let layouts: Vec<LayoutInfo> = Layout::ALL.into_iter().map(LayoutInfo::from).collect();

        let config = load_config()?;

        if wants_json(self.json, &config) {
            print_json(&layouts)?;
            return Ok(());
        }

        println!("{:<7} {:>5} {:>8}  Wiring", "Layout", "Rows", "Columns");
        for info in &layouts {
            let wiring = if info.wiring_configs.is_empty() {
                "-".to_string()
            } else {
                info.wiring_configs.join(", ")
            };
            println!(
                "{:<7} {:>5} {:>8}  {}",
                info.name, info.rows, info.cols, wiring
            );
        }

        Ok(())
    }
}
