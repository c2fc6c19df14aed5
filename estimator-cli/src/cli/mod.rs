//! Command-line interface

pub mod commands;

use clap::{ArgAction, Parser, Subcommand};

use commands::extract::ExtractCommands;
use commands::rules::RulesCommands;

#[derive(Parser, Debug)]
#[command(
    name = "estimator-cli",
    version,
    about = "Extract door estimator pricing from the estimator workbook"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the pricing catalog and write JSON and SQL outputs
    Extract(ExtractCommands),
    /// Show the effective classification rules
    Rules(RulesCommands),
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
