//! Switch Matrix - channel numbering for switch matrix modules
//!
//! Looks up, tabulates and reverse-locates channel identifiers for every
//! supported layout and wiring configuration.

use clap::{Parser, Subcommand};
use switch_matrix::cli::{
    ChannelArgs, CliResult, ConfigArgs, ExitCode, LayoutsArgs, LocateArgs, TableArgs,
};
use switch_matrix::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Switch Matrix - channel numbering for switch matrix modules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the channel identifier for one crosspoint
    Channel(ChannelArgs),
    /// Print every channel of a layout
    Table(TableArgs),
    /// Find the crosspoint addressed by a channel identifier
    Locate(LocateArgs),
    /// List supported layouts
    Layouts(LayoutsArgs),
    /// Show or change default settings
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Channel(args) => args.execute(),
            Self::Table(args) => args.execute(),
            Self::Locate(args) => args.execute(),
            Self::Layouts(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so stdout stays parseable
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        if err.exit_code == ExitCode::ValidationError {
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {APP_BINARY_NAME} --help");
        }
        std::process::exit(err.exit_code.code());
    }
}
