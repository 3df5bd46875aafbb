//! Full channel table for a layout.

// Allow format! appended to String - more readable for building rows
#![allow(clippy::format_push_string)]

use crate::cli::common::{print_json, wants_json, CliResult, ModuleArgs};
use crate::numbering::NumberingFunction;
use clap::Args;
use serde::Serialize;

/// Print every channel of a layout
#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    #[command(flatten)]
    module: ModuleArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TableOutput {
    layout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    wiring: Option<String>,
    rows: u32,
    cols: u32,
    channels: Vec<TableEntry>,
}

#[derive(Debug, Serialize)]
struct TableEntry {
    row: u32,
    col: u32,
    channel: String,
}

impl TableArgs {
    /// Execute the table command
    pub fn execute(&self) -> CliResult<()> {
        let (function, config) = self.module.resolve()?;

        if wants_json(self.json, &config) {
            print_json(&table_output(&function))?;
        } else {
            print!("{}", render_table(&function));
        }

        Ok(())
    }
}

fn table_output(function: &NumberingFunction) -> TableOutput {
    let layout = function.layout();
    TableOutput {
        layout: layout.to_string(),
        wiring: function.wiring().map(|w| w.to_string()),
        rows: layout.rows(),
        cols: layout.cols(),
        channels: function
            .channels()
            .map(|(coord, channel)| TableEntry {
                row: coord.row,
                col: coord.col,
                channel: channel.to_string(),
            })
            .collect(),
    }
}

/// Renders one line per row: `row N: id id id ...`.
fn render_table(function: &NumberingFunction) -> String {
    let layout = function.layout();
    let mut out = String::new();

    out.push_str(&format!("Layout {layout}"));
    if let Some(wiring) = function.wiring() {
        out.push_str(&format!(" ({wiring})"));
    }
    out.push('\n');

    let mut current_row = 0;
    for (coord, channel) in function.channels() {
        if coord.row != current_row {
            if current_row != 0 {
                out.push('\n');
            }
            current_row = coord.row;
            out.push_str(&format!("row {:>2}:", coord.row));
        }
        out.push_str(&format!(" {channel}"));
    }
    out.push('\n');

    out
}
