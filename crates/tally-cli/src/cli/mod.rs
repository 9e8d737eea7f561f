//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use tally_core::config::Config;
use tally_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "Terminal calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Evaluate a flat expression left to right and print the result
    ///
    /// There is no operator precedence: "2 + 3 * 4" is 20, exactly as if
    /// the keys were pressed on the calculator.
    Eval {
        /// Expression to evaluate, e.g. "12.5 + 3 * 2"
        expr: String,

        /// Print the raw result text without grouping separators
        #[arg(long)]
        raw: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a config file with defaults
    Init,
    /// Print the default config template
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = Config::load().context("Failed to load config")?;
            // Logging goes to a file; losing it should not block the calculator
            let _guard = match logging::init() {
                Ok(guard) => Some(guard),
                Err(error) => {
                    eprintln!("Warning: logging disabled: {error:#}");
                    None
                }
            };
            tally_tui::run_calculator(&config)
        }
        Some(Commands::Eval { expr, raw }) => {
            let config = Config::load().context("Failed to load config")?;
            commands::eval::run(&config, &expr, raw)
        }
        Some(Commands::Config { command }) => {
            match command {
                ConfigCommands::Path => commands::config::path(),
                ConfigCommands::Init => commands::config::init()?,
                ConfigCommands::Generate => commands::config::generate(),
            }
            Ok(())
        }
    }
}
